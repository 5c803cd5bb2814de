//! COVID-19 Tracker
//!
//! Worldwide and per-country statistics: three summary tiles, a circle map,
//! a ranked country table and a history chart for the selected metric.
//!
//! Data flow:
//! 1. On mount: adopt `?country=` from the URL, fetch the detail record and
//!    history for it, and load the country collection.
//! 2. Dropdown, table row and map marker clicks go through
//!    `AppState::select_entity`; tile clicks through `select_metric`.
//! 3. Effects re-render the Leaflet map and the D3 chart whenever the
//!    composed view changes.

use cvt_api::entity::EntityCode;
use cvt_core::transform::has_chart_data;
use cvt_core::view::{chart_title, compose};
use cvt_dashboard_ui::components::{
    ChartContainer, ChartHeader, CountryTable, EntitySelector, ErrorDisplay, LoadingSpinner,
    MetricTiles, NoHistoricalData, ThemeToggle,
};
use cvt_dashboard_ui::js_bridge;
use cvt_dashboard_ui::state::AppState;
use dioxus::prelude::*;
use futures::StreamExt;

const MAP_CONTAINER_ID: &str = "case-map";
const CHART_CONTAINER_ID: &str = "history-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Map marker clicks arrive from JS; queue them so the signal writes
    // happen inside the Dioxus runtime.
    let marker_clicks = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        while let Some(code) = rx.next().await {
            log::info!("Map marker selected: {}", code);
            state.select_entity(EntityCode::parse(&code));
        }
    });

    // ─── Effect 1: start-up, once on mount ───
    // Reads nothing reactive, so it never re-runs.
    use_effect(move || {
        js_bridge::init_dashboard_scripts();
        js_bridge::register_marker_handler(move |code| marker_clicks.send(code));
        state.start();
    });

    // ─── Effect 2: map markers and viewport ───
    use_effect(move || {
        let loading = (state.loading)();
        let dark = (state.dark_mode)();
        if loading {
            return;
        }
        let view = compose(&*state.controller.read());

        let markers_json = match serde_json::to_string(&view.markers) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode map markers: {}", e);
                return;
            }
        };
        let config_json = serde_json::json!({
            "color": view.chart.style.hex,
            "darkMode": dark,
            "viewport": view.viewport,
        })
        .to_string();

        js_bridge::render_case_map(MAP_CONTAINER_ID, &markers_json, &config_json);
    });

    // ─── Effect 3: history chart ───
    use_effect(move || {
        let dark = (state.dark_mode)();
        let chart = compose(&*state.controller.read()).chart;

        if !chart.has_data {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }
        let data_json = serde_json::to_string(&chart.points).unwrap_or_default();
        let config_json = serde_json::json!({
            "color": chart.style.hex,
            "fill": chart.style.half_op,
            "darkMode": dark,
        })
        .to_string();

        js_bridge::render_line_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let dark = (state.dark_mode)();
    let page_style = if dark {
        "background: #121212; color: #eee;"
    } else {
        "background: #f5f6fa; color: #222;"
    };
    let card_style = if dark {
        "background: #1e1e1e; border-radius: 4px; padding: 12px 16px;"
    } else {
        "background: #fff; border-radius: 4px; padding: 12px 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.2);"
    };

    let controller = state.controller.read();
    let refreshing = controller.is_refreshing();
    let chart_title = chart_title(controller.detail(), controller.selection().metric);
    let has_chart_data = has_chart_data(controller.series());
    drop(controller);
    let history_caption = state
        .source
        .read()
        .as_ref()
        .map(|source| format!("Last {} days", source.config().history_days))
        .unwrap_or_default();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 16px; font-family: system-ui, -apple-system, sans-serif; {page_style}",

            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap;",

                // Left column: header, tiles, map
                div {
                    style: "flex: 0.9; min-width: 320px;",
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                        h1 {
                            style: "color: #fc3c3c; font-size: 1.8rem; margin: 0;",
                            "COVID-19 TRACKER"
                        }
                        div {
                            style: "display: flex; align-items: center;",
                            ThemeToggle {}
                            EntitySelector {}
                        }
                    }

                    if let Some(err) = state.error_msg.read().as_ref() {
                        ErrorDisplay { message: err.clone() }
                    }

                    MetricTiles {}

                    div {
                        style: "{card_style}",
                        if (state.loading)() {
                            LoadingSpinner { message: "Loading countries...".to_string() }
                        }
                        ChartContainer {
                            id: MAP_CONTAINER_ID.to_string(),
                            min_height: 500,
                        }
                    }
                }

                // Right column: ranked table and history chart
                div {
                    style: "flex: 0.35; min-width: 280px; {card_style}",
                    CountryTable {}

                    ChartHeader {
                        title: chart_title,
                        caption: history_caption,
                    }
                    if has_chart_data {
                        ChartContainer {
                            id: CHART_CONTAINER_ID.to_string(),
                            loading: refreshing,
                            min_height: 260,
                        }
                    } else {
                        NoHistoricalData {}
                    }
                }
            }
        }
    }
}
