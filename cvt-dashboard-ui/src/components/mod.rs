//! Reusable Dioxus RSX components for the COVID-19 dashboard.

mod chart_container;
mod chart_header;
mod country_table;
mod entity_selector;
mod error_display;
mod loading_spinner;
mod metric_tiles;
mod no_data;
mod theme_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use country_table::CountryTable;
pub use entity_selector::EntitySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_tiles::{InfoBox, MetricTiles};
pub use no_data::NoHistoricalData;
pub use theme_toggle::ThemeToggle;
