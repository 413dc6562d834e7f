//! The feature registry: every geometric element a map can accumulate.
//!
//! Features are value data owned by the builder. A feature's id is its
//! insertion index within its own kind; ids stay valid for the life of the
//! builder since removal does not exist.

use crate::core::geo::LatLng;
use crate::features::geojson::GeoJsonOverlay;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The annotatable element kinds.
///
/// GeoJSON overlays are deliberately absent: they carry no id and cannot be
/// annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Marker,
    Circle,
    Polygon,
    Polyline,
}

impl ElementKind {
    /// Resolves a numeric element-type tag as used in stored configuration.
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Self::Marker),
            1 => Ok(Self::Circle),
            2 => Ok(Self::Polygon),
            3 => Ok(Self::Polyline),
            other => Err(MapError::UnknownElementType(other.to_string())),
        }
    }

    /// The numeric tag of this kind.
    pub fn id(&self) -> u8 {
        match self {
            Self::Marker => 0,
            Self::Circle => 1,
            Self::Polygon => 2,
            Self::Polyline => 3,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Marker => write!(f, "marker"),
            ElementKind::Circle => write!(f, "circle"),
            ElementKind::Polygon => write!(f, "polygon"),
            ElementKind::Polyline => write!(f, "polyline"),
        }
    }
}

impl FromStr for ElementKind {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "marker" => Ok(Self::Marker),
            "circle" => Ok(Self::Circle),
            "polygon" => Ok(Self::Polygon),
            "polyline" => Ok(Self::Polyline),
            other => Err(MapError::UnknownElementType(other.to_string())),
        }
    }
}

/// Optional texts attached to a feature after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    /// Text bound as a hover tooltip.
    pub tooltip: Option<String>,
    /// Text bound as a popup.
    pub popup: Option<String>,
    /// Text the shared click handler writes into the output div.
    pub on_click: Option<String>,
}

/// A point of interest at a fixed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub annotations: Annotations,
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            annotations: Annotations::default(),
        }
    }
}

/// A circle around a center point, radius in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: LatLng,
    pub color: Option<String>,
    pub radius: Option<f64>,
    pub annotations: Annotations,
}

impl Circle {
    pub fn new(center: LatLng, color: Option<&str>, radius: Option<f64>) -> Self {
        Self {
            center,
            color: color.map(str::to_string),
            radius,
            annotations: Annotations::default(),
        }
    }
}

/// One polygon part: an outer ring plus any interior holes.
///
/// Rings are [lng, lat] pairs as found in GeoJSON; rendering swaps each pair
/// to [lat, lng].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPart {
    pub exterior: Vec<[f64; 2]>,
    pub holes: Vec<Vec<[f64; 2]>>,
}

impl PolygonPart {
    /// A part with no holes.
    pub fn new(exterior: Vec<[f64; 2]>) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// A part with interior holes.
    pub fn with_holes(exterior: Vec<[f64; 2]>, holes: Vec<Vec<[f64; 2]>>) -> Self {
        Self { exterior, holes }
    }

    fn has_empty_ring(&self) -> bool {
        self.exterior.is_empty() || self.holes.iter().any(|hole| hole.is_empty())
    }
}

/// Polygon geometry: a plain ring or a multi-part set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolygonGeometry {
    /// A single ring of [lng, lat] pairs.
    Ring(Vec<[f64; 2]>),
    /// Several parts, each with optional holes.
    Multi(Vec<PolygonPart>),
}

impl PolygonGeometry {
    /// Fails with [`MapError::EmptyGeometry`] when any ring has no
    /// coordinates.
    pub(crate) fn validate(&self) -> Result<()> {
        let empty = match self {
            Self::Ring(ring) => ring.is_empty(),
            Self::Multi(parts) => {
                parts.is_empty() || parts.iter().any(PolygonPart::has_empty_ring)
            }
        };
        if empty {
            Err(MapError::EmptyGeometry)
        } else {
            Ok(())
        }
    }
}

/// A filled polygon, possibly multi-part with holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub geometry: PolygonGeometry,
    pub color: Option<String>,
    pub annotations: Annotations,
}

impl Polygon {
    pub fn new(geometry: PolygonGeometry, color: Option<&str>) -> Self {
        Self {
            geometry,
            color: color.map(str::to_string),
            annotations: Annotations::default(),
        }
    }
}

/// An open path of [lng, lat] pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub path: Vec<[f64; 2]>,
    pub color: Option<String>,
    pub annotations: Annotations,
}

impl Polyline {
    pub fn new(path: Vec<[f64; 2]>, color: Option<&str>) -> Self {
        Self {
            path,
            color: color.map(str::to_string),
            annotations: Annotations::default(),
        }
    }
}

/// Every feature accumulated so far, one insertion-ordered list per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub markers: Vec<Marker>,
    pub circles: Vec<Circle>,
    pub polygons: Vec<Polygon>,
    pub polylines: Vec<Polyline>,
    pub overlays: Vec<GeoJsonOverlay>,
}

impl FeatureSet {
    /// True when nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
            && self.circles.is_empty()
            && self.polygons.is_empty()
            && self.polylines.is_empty()
            && self.overlays.is_empty()
    }

    /// Total number of accumulated features, overlays included.
    pub fn len(&self) -> usize {
        self.markers.len()
            + self.circles.len()
            + self.polygons.len()
            + self.polylines.len()
            + self.overlays.len()
    }

    /// Mutable access to the annotations of one element.
    pub(crate) fn annotations_mut(
        &mut self,
        kind: ElementKind,
        id: usize,
    ) -> Result<&mut Annotations> {
        let slot = match kind {
            ElementKind::Marker => self.markers.get_mut(id).map(|m| &mut m.annotations),
            ElementKind::Circle => self.circles.get_mut(id).map(|c| &mut c.annotations),
            ElementKind::Polygon => self.polygons.get_mut(id).map(|p| &mut p.annotations),
            ElementKind::Polyline => self.polylines.get_mut(id).map(|p| &mut p.annotations),
        };
        slot.ok_or(MapError::UnknownElementId { kind, id })
    }

    /// True if any feature carries click text.
    pub(crate) fn has_click_text(&self) -> bool {
        self.markers
            .iter()
            .map(|m| &m.annotations)
            .chain(self.circles.iter().map(|c| &c.annotations))
            .chain(self.polygons.iter().map(|p| &p.annotations))
            .chain(self.polylines.iter().map(|p| &p.annotations))
            .any(|a| a.on_click.is_some())
    }
}
