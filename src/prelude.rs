//! Prelude module for common mapscribe types
//!
//! This module re-exports the most commonly used types and functions for
//! easy importing with `use mapscribe::prelude::*;`

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

pub use crate::{MapError, Result};
