//! The selection controller: owns the [`Selection`] and every piece of state
//! derived from it.
//!
//! Selection changes are split in two halves so that the controller is never
//! borrowed across an `await`:
//!
//! 1. `initialize` / `select_entity` / `select_metric` commit the new
//!    selection immediately, update the URL and return [`SelectionEffects`]
//!    describing the fetches to perform.
//! 2. The caller performs the fetches and hands each result back to
//!    `apply_detail` / `apply_series`.
//!
//! Each request carries a per-slot sequence number. Only a response to the
//! most recently issued request of its slot is applied; anything older is
//! discarded, so responses arriving out of order can never leave the detail
//! or the chart describing a previous selection.

use crate::navigation::{query_param, NavigationTarget, Navigator, COUNTRY_PARAM};
use crate::rank::rank;
use crate::selection::{plan_fetches, FetchPlan, Selection, SelectionChange};
use crate::transform::{transform, SeriesPoint};
use crate::viewport::MapViewport;
use cvt_api::client::DataSource;
use cvt_api::entity::{is_valid_country_code, EntityCode, EntitySnapshot};
use cvt_api::metric::MetricKind;
use cvt_api::timeline::Timeline;
use log::{debug, error, info, warn};

/// Request for the current detail record of `entity`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DetailRequest {
    pub seq: u64,
    pub entity: EntityCode,
}

/// Request for the historical series of `entity`, charted as `metric`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SeriesRequest {
    pub seq: u64,
    pub entity: EntityCode,
    pub metric: MetricKind,
}

/// Fetches a selection change asks for.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct SelectionEffects {
    pub detail: Option<DetailRequest>,
    pub series: Option<SeriesRequest>,
}

impl SelectionEffects {
    pub fn is_empty(&self) -> bool {
        self.detail.is_none() && self.series.is_none()
    }
}

/// What happened to a fetch result handed back to the controller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ApplyOutcome {
    /// The result replaced the slot's state.
    Applied,
    /// A newer request for the same slot was issued; the result was dropped.
    Superseded,
    /// The fetch failed; the slot keeps its previous state.
    Failed,
}

pub struct SelectionController<N> {
    navigator: N,
    selection: Selection,
    entities: Vec<EntitySnapshot>,
    ranked: Vec<EntitySnapshot>,
    detail: Option<EntitySnapshot>,
    viewport: MapViewport,
    series: Vec<SeriesPoint>,
    detail_issued: u64,
    detail_settled: u64,
    series_issued: u64,
    series_settled: u64,
}

impl<N: Navigator> SelectionController<N> {
    /// A controller showing worldwide cases, with nothing fetched yet.
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            selection: Selection::default(),
            entities: Vec::new(),
            ranked: Vec::new(),
            detail: None,
            viewport: MapViewport::default(),
            series: Vec::new(),
            detail_issued: 0,
            detail_settled: 0,
            series_issued: 0,
            series_settled: 0,
        }
    }

    /// Adopt the entity named by the URL's `country` parameter, or worldwide
    /// when it is absent or malformed. The URL is left untouched: it already
    /// says what is selected.
    ///
    /// Always requests the initial detail record and series.
    pub fn initialize(&mut self, url_query: &str) -> SelectionEffects {
        self.initialize_with_param(query_param(url_query, COUNTRY_PARAM))
    }

    /// [`initialize`](Self::initialize) for callers that already decoded the
    /// `country` parameter, such as the browser's `URLSearchParams`.
    pub fn initialize_with_param(&mut self, country: Option<String>) -> SelectionEffects {
        let entity = match country {
            Some(code) if is_valid_country_code(&code) => {
                info!("Selecting {} from URL", code);
                EntityCode::parse(&code)
            }
            Some(code) => {
                warn!("Ignoring malformed {} parameter: {:?}", COUNTRY_PARAM, code);
                EntityCode::Worldwide
            }
            None => EntityCode::Worldwide,
        };
        let old = self.selection.clone();
        self.selection.entity = entity;
        let plan = plan_fetches(&old, &self.selection, SelectionChange::Initialize);
        self.issue(plan)
    }

    /// Select an entity from user interaction (dropdown, table row, map
    /// marker). Worldwide navigates to the base path, a country to
    /// `?country=<code>`.
    ///
    /// The detail record is refreshed on every call; the series only when
    /// the entity actually changed.
    pub fn select_entity(&mut self, entity: EntityCode) -> SelectionEffects {
        let old = self.selection.clone();
        self.selection.entity = entity;
        self.navigator
            .navigate(&NavigationTarget::for_entity(&self.selection.entity));
        if !self.entities.is_empty() && !self.is_known(&self.selection.entity) {
            warn!("Selected {} is not in the fetched collection", self.selection.entity);
        }

        let plan = plan_fetches(&old, &self.selection, SelectionChange::Entity);
        self.issue(plan)
    }

    /// Switch the metric. Re-ranks the table immediately; no URL change.
    pub fn select_metric(&mut self, metric: MetricKind) -> SelectionEffects {
        let old = self.selection.clone();
        self.selection.metric = metric;
        let plan = plan_fetches(&old, &self.selection, SelectionChange::Metric);
        if old.metric != metric {
            self.ranked = rank(&self.entities, metric);
        }
        self.issue(plan)
    }

    /// Install a freshly fetched entity collection. On failure the previous
    /// collection (possibly empty) is kept.
    pub fn apply_entities(&mut self, result: anyhow::Result<Vec<EntitySnapshot>>) -> ApplyOutcome {
        match result {
            Ok(entities) => {
                info!("Loaded {} entities", entities.len());
                self.ranked = rank(&entities, self.selection.metric);
                self.entities = entities;
                if !self.is_known(&self.selection.entity) {
                    warn!("Selected {} is not in the fetched collection", self.selection.entity);
                }
                ApplyOutcome::Applied
            }
            Err(e) => {
                error!("Failed to load entity collection: {:#}", e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Hand back the result of a [`DetailRequest`]. On success the detail is
    /// replaced wholesale and the viewport recomputed; a country without
    /// coordinates keeps the previous viewport.
    pub fn apply_detail(
        &mut self,
        request: &DetailRequest,
        result: anyhow::Result<EntitySnapshot>,
    ) -> ApplyOutcome {
        if request.seq != self.detail_issued {
            debug!(
                "Discarding detail for {} (request {}, latest {})",
                request.entity, request.seq, self.detail_issued
            );
            return ApplyOutcome::Superseded;
        }
        self.detail_settled = request.seq;
        match result {
            Ok(detail) => {
                match MapViewport::for_detail(&request.entity, &detail) {
                    Some(viewport) => self.viewport = viewport,
                    None => warn!("No location for {}, keeping viewport", request.entity),
                }
                self.detail = Some(detail);
                ApplyOutcome::Applied
            }
            Err(e) => {
                warn!("Failed to refresh detail for {}: {:#}", request.entity, e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Hand back the result of a [`SeriesRequest`]. The raw timeline is
    /// transformed for the metric the request was issued with.
    pub fn apply_series(
        &mut self,
        request: &SeriesRequest,
        result: anyhow::Result<Timeline>,
    ) -> ApplyOutcome {
        if request.seq != self.series_issued {
            debug!(
                "Discarding {} series for {} (request {}, latest {})",
                request.metric, request.entity, request.seq, self.series_issued
            );
            return ApplyOutcome::Superseded;
        }
        self.series_settled = request.seq;
        match result {
            Ok(timeline) => {
                self.series = transform(&timeline, request.metric);
                debug!(
                    "{} {} series: {} points",
                    request.entity,
                    request.metric,
                    self.series.len()
                );
                ApplyOutcome::Applied
            }
            Err(e) => {
                warn!(
                    "Failed to fetch {} history for {}: {:#}",
                    request.metric, request.entity, e
                );
                ApplyOutcome::Failed
            }
        }
    }

    /// Fetch the entity collection and install it.
    pub async fn load_entities<S: DataSource>(&mut self, source: &S) -> ApplyOutcome {
        let result = source.fetch_countries().await;
        self.apply_entities(result)
    }

    /// Perform the effects one after another and apply their results.
    pub async fn run_effects<S: DataSource>(&mut self, source: &S, effects: SelectionEffects) {
        if let Some(request) = effects.detail {
            let result = source.fetch_detail(&request.entity).await;
            self.apply_detail(&request, result);
        }
        if let Some(request) = effects.series {
            let result = source.fetch_history(&request.entity).await;
            self.apply_series(&request, result);
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn entities(&self) -> &[EntitySnapshot] {
        &self.entities
    }

    /// The collection ranked by the selected metric.
    pub fn ranked(&self) -> &[EntitySnapshot] {
        &self.ranked
    }

    pub fn detail(&self) -> Option<&EntitySnapshot> {
        self.detail.as_ref()
    }

    pub fn viewport(&self) -> MapViewport {
        self.viewport
    }

    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Whether the latest detail or series request is still outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.detail_settled < self.detail_issued || self.series_settled < self.series_issued
    }

    fn is_known(&self, entity: &EntityCode) -> bool {
        match entity {
            EntityCode::Worldwide => true,
            EntityCode::Country(code) => self
                .entities
                .iter()
                .any(|e| e.code() == Some(code.as_str())),
        }
    }

    /// Turn a plan into numbered requests.
    fn issue(&mut self, plan: FetchPlan) -> SelectionEffects {
        SelectionEffects {
            detail: plan.detail.then(|| self.issue_detail()),
            series: plan.series.then(|| self.issue_series()),
        }
    }

    fn issue_detail(&mut self) -> DetailRequest {
        self.detail_issued += 1;
        DetailRequest {
            seq: self.detail_issued,
            entity: self.selection.entity.clone(),
        }
    }

    fn issue_series(&mut self) -> SeriesRequest {
        self.series_issued += 1;
        SeriesRequest {
            seq: self.series_issued,
            entity: self.selection.entity.clone(),
            metric: self.selection.metric,
        }
    }
}
