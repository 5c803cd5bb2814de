//! `summary`: the three tiles for one entity.

use cvt_api::client::DataSource;
use cvt_api::entity::{EntityCode, EntitySnapshot};
use cvt_api::metric::MetricKind;
use cvt_core::format::format_count;
use log::info;

pub async fn run_summary<S: DataSource>(source: &S, entity: EntityCode) -> anyhow::Result<()> {
    info!("Fetching detail for {}", entity);
    let detail = source.fetch_detail(&entity).await?;
    print!("{}", render_summary(&detail));
    Ok(())
}

/// One line per metric: today's increase and the running total.
pub fn render_summary(detail: &EntitySnapshot) -> String {
    let mut out = format!("{}\n", detail.name());
    for kind in MetricKind::ALL {
        out.push_str(&format!(
            "  {:<20} today {:>14}   total {:>16}\n",
            kind.tile_title(),
            format_count(detail.today(kind)),
            format_count(detail.metric(kind)),
        ));
    }
    out
}
