//! Container for a JS-rendered chart or map.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3/Leaflet render into
    pub id: String,
    /// Shows a "Refreshing..." overlay while a fetch is outstanding
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A container div for JS-rendered content with a refresh overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let inner_style = format!("width: 100%; height: {}px;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 12px; z-index: 1000; font-size: 12px; color: #888;",
                    "Refreshing..."
                }
            }
            div {
                id: "{props.id}",
                style: "{inner_style}",
            }
        }
    }
}
