//! Address-bar side of the selection: reads the query on startup and pushes
//! history entries on selection.

use cvt_core::navigation::{NavigationTarget, Navigator, COUNTRY_PARAM};
use wasm_bindgen::JsValue;

/// Pushes a history entry per selection, without reloading the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HistoryNavigator;

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, target: &NavigationTarget) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Worldwide drops the query but stays on the page's own path
        let url = match target {
            NavigationTarget::Base => window
                .location()
                .pathname()
                .unwrap_or_else(|_| target.to_url()),
            NavigationTarget::Entity(_) => target.to_url(),
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = pushed {
            log::warn!("Failed to push history entry {}: {:?}", url, e);
        }
    }
}

/// The page's query string including the leading `?`, or empty.
fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// The decoded `country` parameter of the page URL, if present.
pub fn current_country_param() -> Option<String> {
    let params = web_sys::UrlSearchParams::new_with_str(&current_query()).ok()?;
    params.get(COUNTRY_PARAM)
}
