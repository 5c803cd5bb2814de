//! `history`: the chart series for one entity and metric.

use cvt_api::client::DataSource;
use cvt_api::entity::EntityCode;
use cvt_api::metric::MetricKind;
use cvt_core::format::format_count;
use cvt_core::transform::{has_chart_data, transform, SeriesPoint};
use log::info;

pub async fn run_history<S: DataSource>(source: &S, entity: EntityCode, metric: MetricKind) -> anyhow::Result<()> {
    info!("Fetching {} history for {}", metric, entity);
    let timeline = source.fetch_history(&entity).await?;
    let points = transform(&timeline, metric);
    print!("{}", render_history(&points));
    Ok(())
}

/// `YYYY-MM-DD  value` per point, or the empty-chart message.
pub fn render_history(points: &[SeriesPoint]) -> String {
    if !has_chart_data(points) {
        return "No Historical Data\n".to_string();
    }
    points
        .iter()
        .map(|p| format!("{}  {:>14}\n", p.date.format("%Y-%m-%d"), format_count(Some(p.value))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_history() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 2).unwrap();
        let text = render_history(&[SeriesPoint::new(date, 12_345)]);
        assert_eq!(text, "2021-03-02          12,345\n");
    }

    #[test]
    fn test_render_history_all_zero() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 2).unwrap();
        assert_eq!(render_history(&[]), "No Historical Data\n");
        assert_eq!(render_history(&[SeriesPoint::new(date, 0)]), "No Historical Data\n");
    }
}
