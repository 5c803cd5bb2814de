//! View model: everything a renderer needs, read off the controller.
//!
//! Composition performs no fetching and no state changes. Renderers (the
//! Dioxus components, the CLI printer) take a [`DashboardView`] or one of its
//! parts and draw it; user intents go back to the controller.

use crate::controller::SelectionController;
use crate::format::{format_count, format_stat};
use crate::navigation::Navigator;
use crate::palette::{circle_radius, highlight_color, is_red, metric_style, MetricStyle};
use crate::transform::{has_chart_data, SeriesPoint};
use crate::viewport::MapViewport;
use cvt_api::entity::{EntityCode, EntitySnapshot, LatLng, WORLDWIDE, WORLDWIDE_NAME};
use cvt_api::metric::MetricKind;
use serde::Serialize;

/// One of the three summary tiles.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MetricTile {
    pub kind: MetricKind,
    pub title: &'static str,
    /// Today's increase, abbreviated ("+1.2k")
    pub today: String,
    /// Running total, abbreviated
    pub total: String,
    pub active: bool,
    pub is_red: bool,
}

/// Dropdown entry.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct EntityOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TableRow {
    pub code: Option<String>,
    pub name: String,
    /// Metric value with thousands separators
    pub value: String,
    pub selected: bool,
}

/// Map circle with its popup content.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MapMarker {
    pub code: Option<String>,
    pub name: String,
    pub flag: Option<String>,
    pub center: LatLng,
    /// Meters
    pub radius: f64,
    pub cases: String,
    pub recovered: String,
    pub deaths: String,
    pub selected: bool,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ChartView {
    pub title: String,
    pub points: Vec<SeriesPoint>,
    /// False renders the "No Historical Data" panel instead of a chart
    pub has_data: bool,
    pub style: MetricStyle,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DashboardView {
    pub selected: String,
    pub metric: MetricKind,
    pub tiles: Vec<MetricTile>,
    pub options: Vec<EntityOption>,
    pub table_title: String,
    pub rows: Vec<TableRow>,
    pub highlight_color: &'static str,
    pub markers: Vec<MapMarker>,
    pub viewport: MapViewport,
    pub chart: ChartView,
}

/// Snapshot the controller's state into a renderable view.
pub fn compose<N: Navigator>(controller: &SelectionController<N>) -> DashboardView {
    let selection = controller.selection();
    let metric = selection.metric;
    DashboardView {
        selected: selection.entity.as_str().to_string(),
        metric,
        tiles: metric_tiles(controller.detail(), metric),
        options: entity_options(controller.entities()),
        table_title: table_title(metric),
        rows: table_rows(controller.ranked(), metric, &selection.entity),
        highlight_color: highlight_color(metric),
        markers: map_markers(controller.entities(), metric, &selection.entity),
        viewport: controller.viewport(),
        chart: ChartView {
            title: chart_title(controller.detail(), metric),
            points: controller.series().to_vec(),
            has_data: has_chart_data(controller.series()),
            style: metric_style(metric),
        },
    }
}

pub fn metric_tiles(detail: Option<&EntitySnapshot>, active: MetricKind) -> Vec<MetricTile> {
    MetricKind::ALL
        .iter()
        .map(|&kind| MetricTile {
            kind,
            title: kind.tile_title(),
            today: format_stat(detail.and_then(|d| d.today(kind))),
            total: format_stat(detail.and_then(|d| d.metric(kind))),
            active: kind == active,
            is_red: is_red(kind),
        })
        .collect()
}

/// Worldwide first, then every entity that has a code, in collection order.
pub fn entity_options(entities: &[EntitySnapshot]) -> Vec<EntityOption> {
    let worldwide = EntityOption {
        code: WORLDWIDE.to_string(),
        name: WORLDWIDE_NAME.to_string(),
    };
    std::iter::once(worldwide)
        .chain(entities.iter().filter_map(|e| {
            Some(EntityOption {
                code: e.code()?.to_string(),
                name: e.name().to_string(),
            })
        }))
        .collect()
}

pub fn table_rows(ranked: &[EntitySnapshot], metric: MetricKind, selected: &EntityCode) -> Vec<TableRow> {
    ranked
        .iter()
        .map(|e| TableRow {
            code: e.code().map(str::to_string),
            name: e.name().to_string(),
            value: format_count(e.metric(metric)),
            selected: is_selected(e, selected),
        })
        .collect()
}

/// Circles for every entity with coordinates.
pub fn map_markers(entities: &[EntitySnapshot], metric: MetricKind, selected: &EntityCode) -> Vec<MapMarker> {
    entities
        .iter()
        .filter_map(|e| {
            Some(MapMarker {
                center: e.location()?,
                code: e.code().map(str::to_string),
                name: e.name().to_string(),
                flag: e.flag().map(str::to_string),
                radius: circle_radius(e.metric(metric), metric),
                cases: format_count(e.cases),
                recovered: format_count(e.recovered),
                deaths: format_count(e.deaths),
                selected: is_selected(e, selected),
            })
        })
        .collect()
}

/// "France new cases", "Worldwide Total recovered".
pub fn chart_title(detail: Option<&EntitySnapshot>, metric: MetricKind) -> String {
    let name = detail.map(EntitySnapshot::name).unwrap_or(WORLDWIDE_NAME);
    let scope = if metric.is_cumulative_chart() { "Total" } else { "new" };
    format!("{} {} {}", name, scope, metric)
}

pub fn table_title(metric: MetricKind) -> String {
    format!("Live {} by Country", metric.label())
}

fn is_selected(entity: &EntitySnapshot, selected: &EntityCode) -> bool {
    match selected {
        EntityCode::Worldwide => false,
        EntityCode::Country(code) => entity.code() == Some(code.as_str()),
    }
}
