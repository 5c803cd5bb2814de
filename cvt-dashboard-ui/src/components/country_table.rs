//! Ranked country table.

use crate::state::AppState;
use cvt_api::entity::EntityCode;
use cvt_core::palette::highlight_color;
use cvt_core::view::{table_rows, table_title};
use dioxus::prelude::*;

/// Countries ranked by the selected metric. Clicking a row selects it.
#[component]
pub fn CountryTable() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let selection = controller.selection().clone();
    let rows = table_rows(controller.ranked(), selection.metric, &selection.entity);
    drop(controller);
    let title = table_title(selection.metric);
    let active_color = highlight_color(selection.metric);
    let rows: Vec<_> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let style = if row.selected {
                format!("cursor: pointer; outline: 2px solid {};", active_color)
            } else if index % 2 == 0 {
                "cursor: pointer; background: rgba(128,128,128,0.1);".to_string()
            } else {
                "cursor: pointer;".to_string()
            };
            (index, row, style)
        })
        .collect();

    rsx! {
        h3 { "{title}" }
        div {
            style: "height: 400px; overflow-y: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                tbody {
                    for (index, row, style) in rows {
                        tr {
                            key: "{index}-{row.name}",
                            "data-selected": row.selected,
                            style: "{style}",
                            onclick: move |_| {
                                if let Some(code) = row.code.clone() {
                                    state.select_entity(EntityCode::Country(code));
                                }
                            },
                            td { style: "padding: 6px 8px;", "{row.name}" }
                            td {
                                style: "padding: 6px 8px; text-align: right;",
                                strong { "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
