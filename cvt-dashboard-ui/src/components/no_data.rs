//! Placeholder shown instead of an empty chart.

use dioxus::prelude::*;

#[component]
pub fn NoHistoricalData() -> Element {
    rsx! {
        div {
            style: "height: 260px; display: flex; flex-direction: column; align-items: center; justify-content: center; color: #777; text-align: center; padding: 20px;",
            h4 {
                style: "margin-bottom: 10px; font-size: 1.2rem;",
                "No Historical Data"
            }
            p {
                style: "font-size: 0.9rem;",
                "Data not available for this period."
            }
        }
    }
}
