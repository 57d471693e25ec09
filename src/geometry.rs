//! Overlay geometry for the patrol map.
//!
//! DESIGN
//! ======
//! Every selectable shape maps to one fixed overlay anchored at the Siebel
//! Center coordinate. The mapping is pure: the same `ShapeKind` always
//! produces the same geometry, independent of prior selections. Unknown shape
//! names fail closed — `ShapeKind::parse` returns `None` and no overlay is
//! produced.

use serde::{Deserialize, Serialize};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Siebel Center on the UIUC campus — the map center and the anchor for
/// every overlay.
pub const SIEBEL_CENTER: LatLng = LatLng { lat: 40.1138, lng: -88.2249 };

/// Initial map zoom level.
pub const MAP_ZOOM: u8 = 15;

/// Half-extent of each overlay, in degrees.
const OFFSET: f64 = 0.001;

// =============================================================================
// TYPES
// =============================================================================

/// A latitude/longitude pair. Overlays embed it via [`LatLng::pair`], the
/// `[lat, lng]` order Leaflet expects for positions and bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// This point shifted by the given deltas in degrees.
    #[must_use]
    pub fn shifted(self, dlat: f64, dlng: f64) -> Self {
        Self { lat: self.lat + dlat, lng: self.lng + dlng }
    }

    /// `[lat, lng]` pair for embedding into the page.
    #[must_use]
    pub fn pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// The operator-selectable overlay shapes. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Triangle,
    Square,
}

impl ShapeKind {
    /// All shapes, in the order the dropdown lists them.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Line, ShapeKind::Triangle, ShapeKind::Square];

    /// Parse a wire/form value. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "line" => Some(Self::Line),
            "triangle" => Some(Self::Triangle),
            "square" => Some(Self::Square),
            _ => None,
        }
    }

    /// Wire name of this shape.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Square => "square",
        }
    }
}

/// A renderable map overlay. Tagged so the page script can dispatch on
/// `type` when constructing the matching Leaflet layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Overlay {
    /// Axis-aligned rectangle given by its south-west and north-east corners.
    Rectangle { bounds: [[f64; 2]; 2], color: String },
    /// Closed polygon through the given vertices.
    Polygon { positions: Vec<[f64; 2]>, color: String },
    /// Open line segment through the given vertices.
    Polyline { positions: Vec<[f64; 2]>, color: String },
}

// =============================================================================
// SHAPE -> OVERLAY
// =============================================================================

/// The fixed overlay for a shape, anchored at [`SIEBEL_CENTER`].
#[must_use]
pub fn overlay_for(kind: ShapeKind) -> Overlay {
    let c = SIEBEL_CENTER;
    match kind {
        ShapeKind::Square => Overlay::Rectangle {
            bounds: [c.shifted(-OFFSET, -OFFSET).pair(), c.shifted(OFFSET, OFFSET).pair()],
            color: "blue".into(),
        },
        ShapeKind::Triangle => Overlay::Polygon {
            positions: vec![
                c.shifted(0.0, -OFFSET).pair(),
                c.shifted(-OFFSET, OFFSET).pair(),
                c.shifted(OFFSET, OFFSET).pair(),
            ],
            color: "red".into(),
        },
        ShapeKind::Line => Overlay::Polyline {
            positions: vec![c.shifted(-OFFSET, -OFFSET).pair(), c.shifted(OFFSET, OFFSET).pair()],
            color: "green".into(),
        },
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
