//! Core types and API client for disease.sh COVID-19 statistics.
//!
//! - `entity`: per-country / worldwide snapshot records and entity codes
//! - `metric`: the metric kinds the dashboard can display
//! - `timeline`: historical cumulative series
//! - `client`: the `DataSource` trait and its reqwest implementation
//! - `config`: endpoint configuration

pub mod client;
pub mod config;
pub mod entity;
pub mod metric;
pub mod timeline;
