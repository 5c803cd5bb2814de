//! Endpoint configuration for the disease.sh API.

use crate::entity::EntityCode;

/// Public disease.sh host.
pub const DEFAULT_BASE_URL: &str = "https://disease.sh";

/// Trailing window for historical series, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 120;

/// Where and how much to fetch.
#[derive(Debug, PartialEq, Clone)]
pub struct ApiConfig {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    /// Number of trailing days requested from historical endpoints
    pub history_days: u32,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            history_days: DEFAULT_HISTORY_DAYS,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn all_url(&self) -> String {
        format!("{}/v3/covid-19/all", self.base_url)
    }

    pub fn countries_url(&self) -> String {
        format!("{}/v3/covid-19/countries", self.base_url)
    }

    pub fn country_url(&self, code: &str) -> String {
        format!("{}/v3/covid-19/countries/{}", self.base_url, code)
    }

    pub fn history_url(&self, entity: &EntityCode) -> String {
        let target = match entity {
            EntityCode::Worldwide => "all",
            EntityCode::Country(code) => code.as_str(),
        };
        format!(
            "{}/v3/covid-19/historical/{}?lastdays={}",
            self.base_url, target, self.history_days
        )
    }
}
