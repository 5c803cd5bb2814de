//! Shared Dioxus components and browser glue for the COVID-19 dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line chart and Leaflet map via `js_sys::eval()`
//! - `navigator`: the `history.pushState` implementation of `Navigator`
//! - `state`: `AppState`, the Dioxus handle on the selection controller
//! - `components`: reusable RSX components (tiles, selector, table, etc.)

pub mod components;
pub mod js_bridge;
pub mod navigator;
pub mod state;
