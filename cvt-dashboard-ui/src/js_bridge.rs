//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js line chart and Leaflet map live in `assets/js/*.js`. They are
//! evaluated as globals (no ES modules) once both libraries have loaded, and
//! exposed via `window.*`. Payloads cross the boundary as JSON strings.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

// Embed the chart/map JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static CASE_MAP_JS: &str = include_str!("../assets/js/case-map.js");

/// Global the map calls with an ISO2 code when a circle is clicked.
const MARKER_HANDLER: &str = "__cvtSelectCountry";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CVT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// JSON text as a JS string literal.
fn js_string(json: &str) -> String {
    serde_json::to_string(json).unwrap_or_else(|_| "''".to_string())
}

/// Initialize dashboard scripts with a wait-for-libraries polling loop.
///
/// The script files define functions via `function` declarations; they are
/// evaluated at global scope via indirect eval once `d3` and `L` exist, then
/// promoted to `window.*` explicitly. Safe to call more than once.
pub fn init_dashboard_scripts() {
    let all_js = [LINE_CHART_JS, CASE_MAP_JS].join("\n");

    let store_js = format!(
        "if (!window.__cvtScriptsReady) {{ window.__cvtScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__cvtScriptsReady || window.__cvtScriptsPolling) return;
            window.__cvtScriptsPolling = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__cvtScripts);
                    delete window.__cvtScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderCaseMap !== 'undefined') window.renderCaseMap = renderCaseMap;
                    window.__cvtScriptsReady = true;
                    console.log('CVT dashboard scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until scripts are ready and the container exists, then call
/// `window.<function>(container, data, config)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cvtScriptsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {data}, {config});
                    }} catch(e) {{ console.error('[CVT] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the line chart of transformed series points.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render (or update) the circle map of country markers.
pub fn render_case_map(container_id: &str, markers_json: &str, config_json: &str) {
    render_when_ready("renderCaseMap", container_id, markers_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Route map circle clicks to `handler`. The closure lives for the rest of
/// the page.
pub fn register_marker_handler(handler: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(String)>::new(handler);
    let set = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(MARKER_HANDLER),
        closure.as_ref().unchecked_ref(),
    );
    if let Err(e) = set {
        log::warn!("Failed to register marker handler: {:?}", e);
    }
    closure.forget();
}
