//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and route user intents through its
//! `select_*` methods, which commit the selection on the controller and
//! spawn the fetches it asks for.

use crate::navigator::{current_country_param, HistoryNavigator};
use cvt_api::client::{DataSource, HttpSource};
use cvt_api::config::ApiConfig;
use cvt_api::entity::EntityCode;
use cvt_api::metric::MetricKind;
use cvt_core::controller::{SelectionController, SelectionEffects};
use dioxus::prelude::*;

pub type DashboardController = SelectionController<HistoryNavigator>;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selection and all derived data
    pub controller: Signal<DashboardController>,
    /// HTTP client (None if it could not be built)
    pub source: Signal<Option<HttpSource>>,
    /// Whether the country collection is still loading
    pub loading: Signal<bool>,
    /// Error message if the initial load failed
    pub error_msg: Signal<Option<String>>,
    /// Light/dark display mode; in memory only
    pub dark_mode: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let (source, error_msg) = match HttpSource::new(ApiConfig::default()) {
            Ok(source) => (Some(source), None),
            Err(e) => (None, Some(format!("Failed to create HTTP client: {:#}", e))),
        };
        Self {
            controller: Signal::new(SelectionController::new(HistoryNavigator)),
            source: Signal::new(source),
            loading: Signal::new(true),
            error_msg: Signal::new(error_msg),
            dark_mode: Signal::new(false),
        }
    }

    /// Adopt the URL selection and load the country collection. Call once on
    /// mount.
    pub fn start(self) {
        let mut controller = self.controller;
        let mut loading = self.loading;
        let mut error_msg = self.error_msg;

        let effects = controller.write().initialize_with_param(current_country_param());
        self.dispatch(effects);

        let Some(source) = (*self.source.peek()).clone() else {
            loading.set(false);
            return;
        };
        spawn(async move {
            let result = source.fetch_countries().await;
            if let Err(e) = &result {
                error_msg.set(Some(format!("Failed to load country data: {:#}", e)));
            }
            controller.write().apply_entities(result);
            loading.set(false);
        });
    }

    /// Dropdown, table row or map marker selection.
    pub fn select_entity(self, entity: EntityCode) {
        let mut controller = self.controller;
        let effects = controller.write().select_entity(entity);
        self.dispatch(effects);
    }

    /// Metric tile click.
    pub fn select_metric(self, metric: MetricKind) {
        let mut controller = self.controller;
        let effects = controller.write().select_metric(metric);
        self.dispatch(effects);
    }

    pub fn toggle_dark_mode(self) {
        let mut dark_mode = self.dark_mode;
        let current = *dark_mode.peek();
        dark_mode.set(!current);
    }

    /// Spawn one task per requested fetch. Tasks run concurrently; the
    /// controller drops any response that a newer request has superseded.
    fn dispatch(self, effects: SelectionEffects) {
        let Some(source) = (*self.source.peek()).clone() else {
            return;
        };
        let mut controller = self.controller;

        if let Some(request) = effects.detail {
            let source = source.clone();
            spawn(async move {
                let result = source.fetch_detail(&request.entity).await;
                controller.write().apply_detail(&request, result);
            });
        }
        if let Some(request) = effects.series {
            spawn(async move {
                let result = source.fetch_history(&request.entity).await;
                controller.write().apply_series(&request, result);
            });
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
