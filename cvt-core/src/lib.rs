//! Selection state machine and derived data for the COVID-19 dashboard.
//!
//! Everything here is independent of the renderer: the Dioxus web app and
//! the CLI both drive a [`controller::SelectionController`] and render the
//! [`view::DashboardView`] it composes into.

pub mod controller;
pub mod format;
pub mod navigation;
pub mod palette;
pub mod rank;
pub mod selection;
pub mod transform;
pub mod view;
pub mod viewport;
