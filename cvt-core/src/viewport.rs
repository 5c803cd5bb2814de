//! Map camera placement.

use cvt_api::entity::{EntityCode, EntitySnapshot, LatLng};
use serde::Serialize;

/// Worldwide view centered on the North Atlantic.
pub const DEFAULT_CENTER: LatLng = LatLng::new(34.80746, -40.4796);
pub const DEFAULT_ZOOM: u8 = 3;
/// Zoom used when a single country is selected.
pub const COUNTRY_ZOOM: u8 = 5;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapViewport {
    /// Viewport for a freshly fetched detail record. A country without
    /// coordinates has nowhere to fly to and yields `None`.
    pub fn for_detail(entity: &EntityCode, detail: &EntitySnapshot) -> Option<Self> {
        match entity {
            EntityCode::Worldwide => Some(MapViewport::default()),
            EntityCode::Country(_) => detail.location().map(|center| MapViewport {
                center,
                zoom: COUNTRY_ZOOM,
            }),
        }
    }
}
