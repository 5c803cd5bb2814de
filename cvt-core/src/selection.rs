//! The dashboard's authoritative UI state and what a change to it implies.

use cvt_api::entity::EntityCode;
use cvt_api::metric::MetricKind;

/// Which entity and which metric are on screen.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Selection {
    pub entity: EntityCode,
    pub metric: MetricKind,
}

/// Fetches required after a selection change.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct FetchPlan {
    /// Current detail record of the selected entity
    pub detail: bool,
    /// Historical series of the selected entity and metric
    pub series: bool,
}

impl FetchPlan {
    pub fn is_empty(&self) -> bool {
        !self.detail && !self.series
    }
}

/// What caused the selection to change.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SelectionChange {
    /// Page load, selection taken from the URL
    Initialize,
    /// Dropdown, table row or map marker
    Entity,
    /// Metric tile
    Metric,
}

/// Startup fetches both. An entity pick always refreshes the detail record,
/// even when the same entity is picked again; a metric pick never does. The
/// series follows the entity and the metric. The ranked table is recomputed
/// synchronously and never needs a fetch.
pub fn plan_fetches(old: &Selection, new: &Selection, change: SelectionChange) -> FetchPlan {
    let selection_changed = old.entity != new.entity || old.metric != new.metric;
    match change {
        SelectionChange::Initialize => FetchPlan {
            detail: true,
            series: true,
        },
        SelectionChange::Entity => FetchPlan {
            detail: true,
            series: selection_changed,
        },
        SelectionChange::Metric => FetchPlan {
            detail: false,
            series: selection_changed,
        },
    }
}
