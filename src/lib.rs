//! # Mapscribe
//!
//! A server-side builder for embeddable [Leaflet](https://leafletjs.com/)
//! map fragments.
//!
//! A [`MapBuilder`] accumulates a map description: the container div, a tile
//! provider, and any number of markers, circles, polygons, polylines and raw
//! GeoJSON overlays. [`MapBuilder::render`] projects that description into an
//! HTML fragment plus the inline script that drives Leaflet in the browser.
//! Rendering is deterministic: the same state always produces the same bytes.
//!
//! Strings placed on the map (tooltips, popups, click texts, attribution,
//! styles) are embedded in the output without any escaping, so they must not
//! come from untrusted input.
//!
//! ```
//! use mapscribe::MapBuilder;
//!
//! # fn main() -> mapscribe::Result<()> {
//! let mut map = MapBuilder::new().with_id("demo");
//! map.add_marker(40.4168, -3.7038);
//! let fragment = map.render()?;
//! assert!(fragment.contains("L.marker"));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod features;
pub mod render;
pub mod tiles;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::MapConfig,
    geo::{LatLng, LatLngBounds},
    viewport::Viewport,
};

pub use crate::features::{
    geojson::GeoJsonOverlay,
    shapes::{
        Annotations, Circle, ElementKind, FeatureSet, Marker, Polygon, PolygonGeometry,
        PolygonPart, Polyline,
    },
};

pub use crate::render::{head_tags, on_click_div};

pub use crate::tiles::{CustomTiles, TileProtocol, TileProvider, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("bounds must have exactly 4 elements, got {0}")]
    InvalidBounds(usize),

    #[error("geometry has no coordinates")]
    EmptyGeometry,

    #[error("no {kind} with id {id}")]
    UnknownElementId { kind: ElementKind, id: usize },

    #[error("unknown element type: {0}")]
    UnknownElementType(String),

    #[error("unknown tile provider: {0}")]
    InvalidTileSelection(String),

    #[error("custom tile server is not fully configured")]
    TileConfigurationMissing,

    #[error("nothing to display: no features and no center or bounds set")]
    NothingToDisplay,

    #[error("cannot find a coordinate pair in the GeoJSON payload")]
    UnsupportedGeoJsonShape,
}

/// Error type alias for convenience
pub type Error = MapError;
