//! Summary tiles: today's increase and running total per metric.

use crate::state::AppState;
use cvt_core::view::{metric_tiles, MetricTile};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoBoxProps {
    pub tile: MetricTile,
    pub dark: bool,
    pub onclick: EventHandler<MouseEvent>,
}

/// A single clickable tile. The active tile gets a coloured top border.
#[component]
pub fn InfoBox(props: InfoBoxProps) -> Element {
    let tile = &props.tile;
    let accent = if tile.is_red { "#cc1034" } else { "#7dd71d" };
    let border = if tile.active {
        format!("border-top: 10px solid {};", accent)
    } else {
        "border-top: 10px solid transparent;".to_string()
    };
    let background = if props.dark { "#1e1e1e" } else { "#fff" };
    let style = format!(
        "flex: 1; cursor: pointer; padding: 12px 16px; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,0.2); background: {}; {}",
        background, border
    );
    let today_color = if tile.is_red { "#cc1034" } else { "#7dd71d" };

    rsx! {
        div {
            style: "{style}",
            onclick: move |evt| props.onclick.call(evt),
            div {
                style: "color: #888; font-size: 14px;",
                "{tile.title}"
            }
            h2 {
                style: "margin: 8px 0; font-weight: 600; color: {today_color};",
                "{tile.today}"
            }
            div {
                style: "color: #888; font-size: 13px; font-weight: 700;",
                "{tile.total} Total"
            }
        }
    }
}

/// The three tiles for the current detail record. Clicking one selects its
/// metric.
#[component]
pub fn MetricTiles() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let tiles = metric_tiles(controller.detail(), controller.selection().metric);
    drop(controller);
    let dark = (state.dark_mode)();

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin-bottom: 12px;",
            for tile in tiles {
                InfoBox {
                    key: "{tile.kind}",
                    dark,
                    onclick: move |_| state.select_metric(tile.kind),
                    tile: tile.clone(),
                }
            }
        }
    }
}
