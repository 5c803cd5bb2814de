//! Remote data source abstraction and its disease.sh implementation.

use crate::entity::{EntityCode, EntitySnapshot};
use crate::timeline::{CountryHistorical, Timeline};
use anyhow::Context;
use log::info;
use serde::de::DeserializeOwned;

#[cfg(feature = "api")]
use crate::config::ApiConfig;
#[cfg(feature = "api")]
use log::debug;
#[cfg(feature = "api")]
use reqwest::Client;

const STATUS_NOT_FOUND: u16 = 404;

/// The four logical endpoints the dashboard consumes.
///
/// Implementations only fetch and decode; they never retry. Futures are not
/// required to be `Send` so the trait works on the single-threaded browser
/// executor.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Worldwide current aggregate.
    async fn fetch_worldwide(&self) -> anyhow::Result<EntitySnapshot>;

    /// Current snapshot of every country.
    async fn fetch_countries(&self) -> anyhow::Result<Vec<EntitySnapshot>>;

    /// Current snapshot of one country.
    async fn fetch_country(&self, code: &str) -> anyhow::Result<EntitySnapshot>;

    /// Historical cumulative series for the trailing window. An entity
    /// without history yields an empty [`Timeline`], not an error.
    async fn fetch_history(&self, entity: &EntityCode) -> anyhow::Result<Timeline>;

    /// Detail record for the selected entity.
    async fn fetch_detail(&self, entity: &EntityCode) -> anyhow::Result<EntitySnapshot> {
        match entity {
            EntityCode::Worldwide => self.fetch_worldwide().await,
            EntityCode::Country(code) => self.fetch_country(code).await,
        }
    }
}

/// disease.sh over HTTP.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ApiConfig,
}

#[cfg(feature = "api")]
impl HttpSource {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let client = with_timeout(Client::builder(), config.timeout_secs)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET, returning the status code and the body text.
    async fn get_text(&self, url: &str) -> anyhow::Result<(u16, String)> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request failed: {}", url))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response from {}", url))?;
        Ok((status, body))
    }

    /// GET and decode, treating 404 as `None`.
    async fn get_json_opt<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<Option<T>> {
        let (status, body) = self.get_text(url).await?;
        decode_response(url, status, &body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        self.get_json_opt(url)
            .await?
            .with_context(|| format!("not found: {}", url))
    }
}

#[cfg(all(feature = "api", not(target_arch = "wasm32")))]
fn with_timeout(builder: reqwest::ClientBuilder, secs: Option<u64>) -> reqwest::ClientBuilder {
    match secs {
        Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
        None => builder,
    }
}

// The browser fetch transport has no configurable timeout.
#[cfg(all(feature = "api", target_arch = "wasm32"))]
fn with_timeout(builder: reqwest::ClientBuilder, _secs: Option<u64>) -> reqwest::ClientBuilder {
    builder
}

#[cfg(feature = "api")]
impl DataSource for HttpSource {
    async fn fetch_worldwide(&self) -> anyhow::Result<EntitySnapshot> {
        self.get_json(&self.config.all_url()).await
    }

    async fn fetch_countries(&self) -> anyhow::Result<Vec<EntitySnapshot>> {
        let countries: Vec<EntitySnapshot> = self.get_json(&self.config.countries_url()).await?;
        info!("Fetched {} country snapshots", countries.len());
        Ok(countries)
    }

    async fn fetch_country(&self, code: &str) -> anyhow::Result<EntitySnapshot> {
        self.get_json(&self.config.country_url(code)).await
    }

    async fn fetch_history(&self, entity: &EntityCode) -> anyhow::Result<Timeline> {
        let url = self.config.history_url(entity);
        let (status, body) = self.get_text(&url).await?;
        decode_history(entity, &url, status, &body)
    }
}

/// Decode a response body by status: 404 is `None`, any other non-2xx is an
/// error.
pub fn decode_response<T: DeserializeOwned>(url: &str, status: u16, body: &str) -> anyhow::Result<Option<T>> {
    if status == STATUS_NOT_FOUND {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        anyhow::bail!("bad response status for {}: {}", url, status);
    }
    serde_json::from_str(body)
        .map(Some)
        .with_context(|| format!("failed to decode response from {}", url))
}

/// Decode a historical response. Worldwide is a bare [`Timeline`]; a
/// country wraps it in [`CountryHistorical`]. A 404 means the entity has no
/// history and yields the empty timeline.
pub fn decode_history(entity: &EntityCode, url: &str, status: u16, body: &str) -> anyhow::Result<Timeline> {
    let timeline = match entity {
        EntityCode::Worldwide => decode_response::<Timeline>(url, status, body)?,
        EntityCode::Country(_) => {
            decode_response::<CountryHistorical>(url, status, body)?.map(|historical| historical.timeline)
        }
    };
    Ok(timeline.unwrap_or_else(|| {
        info!("No historical data for {}", entity);
        Timeline::default()
    }))
}
