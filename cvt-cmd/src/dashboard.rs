//! `dashboard`: drive the selection controller exactly as the web page does
//! on load, then print the composed view.

use cvt_api::client::DataSource;
use cvt_api::metric::MetricKind;
use cvt_core::controller::SelectionController;
use cvt_core::format::format_axis_tick;
use cvt_core::navigation::RecordingNavigator;
use cvt_core::transform::SeriesPoint;
use cvt_core::view::{compose, DashboardView};
use log::info;

pub async fn run_dashboard<S: DataSource>(
    source: &S,
    query: &str,
    metric: MetricKind,
    limit: usize,
) -> anyhow::Result<()> {
    let mut controller = SelectionController::new(RecordingNavigator::default());

    let effects = controller.initialize(query);
    controller.run_effects(source, effects).await;
    controller.load_entities(source).await;

    if metric != controller.selection().metric {
        let effects = controller.select_metric(metric);
        controller.run_effects(source, effects).await;
    }

    let view = compose(&controller);
    info!("Composed view for {} ({} countries)", view.selected, view.rows.len());
    print!("{}", render_dashboard(&view, limit));
    Ok(())
}

/// Text rendering of the page: tiles, the top `limit` table rows, the map
/// viewport and a chart summary.
pub fn render_dashboard(view: &DashboardView, limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("COVID-19 TRACKER  [{}]\n\n", view.selected));

    for tile in &view.tiles {
        let marker = if tile.active { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<20} {:>10}  {:>10} Total\n",
            marker, tile.title, tile.today, tile.total
        ));
    }

    out.push_str(&format!("\n{}\n", view.table_title));
    for row in view.rows.iter().take(limit) {
        let marker = if row.selected { ">" } else { " " };
        out.push_str(&format!("{} {:<32} {:>16}\n", marker, row.name, row.value));
    }
    if view.rows.len() > limit {
        out.push_str(&format!("  ... {} more\n", view.rows.len() - limit));
    }

    out.push_str(&format!(
        "\nMap: {} markers, centered on ({:.4}, {:.4}) at zoom {}\n",
        view.markers.len(),
        view.viewport.center.lat,
        view.viewport.center.lng,
        view.viewport.zoom
    ));

    out.push_str(&format!("\n{}\n", view.chart.title));
    if view.chart.has_data {
        out.push_str(&chart_summary(&view.chart.points));
    } else {
        out.push_str("No Historical Data\n");
    }
    out
}

/// Range and peak of the chart series.
fn chart_summary(points: &[SeriesPoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    match points.iter().max_by_key(|p| p.value) {
        Some(peak) => format!(
            "{} points from {} to {}, peak {} on {}\n",
            points.len(),
            first.date,
            last.date,
            format_axis_tick(peak.value as f64),
            peak.date
        ),
        None => String::new(),
    }
}
