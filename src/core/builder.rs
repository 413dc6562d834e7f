//! Map builder: accumulate configuration and features, then render.
//!
//! The builder is the crate's entry point. Every mutation is in-memory and
//! deterministic, so the same sequence of calls always renders the same
//! fragment.

use serde::{Deserialize, Serialize};

use crate::core::config::MapConfig;
use crate::core::geo::LatLng;
use crate::core::viewport::Viewport;
use crate::features::geojson::{self, GeoJsonOverlay};
use crate::features::shapes::{
    Circle, ElementKind, FeatureSet, Marker, Polygon, PolygonGeometry, PolygonPart, Polyline,
};
use crate::render;
use crate::tiles::{CustomTiles, TileProvider};
use crate::{MapError, Result};

/// Accumulates a map description and renders it as an HTML fragment.
///
/// ```
/// use mapscribe::MapBuilder;
///
/// let mut map = MapBuilder::new().with_id("sights");
/// map.add_marker(40.4168, -3.7038);
/// let fragment = map.render()?;
/// assert!(fragment.contains("sights"));
/// # Ok::<(), mapscribe::MapError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapBuilder {
    config: MapConfig,
    viewport: Viewport,
    features: FeatureSet,
}

impl MapBuilder {
    /// Creates a builder with the default container, size and tile provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id of the emitted container div.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.config.id = id.into();
        self
    }

    /// Sets the container size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Appends extra inline CSS declarations to the container div.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.config.style = Some(style.into());
        self
    }

    /// Selects the tile provider for the base layer.
    pub fn with_tiles(mut self, provider: TileProvider) -> Self {
        self.config.provider = provider;
        self
    }

    /// Configures a custom tile server and selects it as the provider.
    pub fn with_custom_tiles(mut self, tiles: CustomTiles) -> Self {
        self.config.custom_tiles = tiles;
        self.config.provider = TileProvider::Custom;
        self
    }

    /// Sets the view explicitly. `bounds` is either empty or
    /// `[south, north, west, east]`; a non-empty bounds takes precedence
    /// over the center when rendering, and an empty slice drops any bounds
    /// from an earlier call so the view falls back to center plus zoom.
    pub fn set_center(
        &mut self,
        lat: f64,
        lng: f64,
        bounds: &[f64],
        zoom: Option<u8>,
    ) -> Result<()> {
        self.viewport.set_center(lat, lng, bounds, zoom)
    }

    /// Adds a marker and returns its id within the marker group.
    pub fn add_marker(&mut self, lat: f64, lng: f64) -> usize {
        self.features.markers.push(Marker::new(LatLng::new(lat, lng)));
        self.features.markers.len() - 1
    }

    /// Adds a circle and returns its id within the circle group.
    ///
    /// The first circle also becomes the map center when none was set,
    /// matching the marker-free usage where circles stand alone.
    pub fn add_circle(
        &mut self,
        lat: f64,
        lng: f64,
        color: Option<&str>,
        radius: Option<f64>,
    ) -> usize {
        let center = LatLng::new(lat, lng);
        self.viewport.default_center(center);
        self.features.circles.push(Circle::new(center, color, radius));
        self.features.circles.len() - 1
    }

    /// Adds a single-ring polygon of `[lng, lat]` vertices and returns its
    /// id within the polygon group.
    pub fn add_polygon(&mut self, ring: Vec<[f64; 2]>, color: Option<&str>) -> Result<usize> {
        self.push_polygon(PolygonGeometry::Ring(ring), color)
    }

    /// Adds a multipolygon and returns its id within the polygon group.
    /// Parts share the polygon id space with single-ring polygons.
    pub fn add_multipolygon(
        &mut self,
        parts: Vec<PolygonPart>,
        color: Option<&str>,
    ) -> Result<usize> {
        self.push_polygon(PolygonGeometry::Multi(parts), color)
    }

    fn push_polygon(&mut self, geometry: PolygonGeometry, color: Option<&str>) -> Result<usize> {
        geometry.validate()?;
        self.features.polygons.push(Polygon::new(geometry, color));
        Ok(self.features.polygons.len() - 1)
    }

    /// Adds a polyline of `[lng, lat]` vertices and returns its id within
    /// the polyline group.
    pub fn add_polyline(&mut self, path: Vec<[f64; 2]>, color: Option<&str>) -> Result<usize> {
        if path.is_empty() {
            return Err(MapError::EmptyGeometry);
        }
        self.features.polylines.push(Polyline::new(path, color));
        Ok(self.features.polylines.len() - 1)
    }

    /// Adds a GeoJSON overlay. The payload is embedded verbatim in the
    /// script, so it must already be valid JSON.
    ///
    /// When no center is set yet, the first coordinate pair found in the
    /// payload becomes the center; a payload without a usable pair is
    /// rejected and not added.
    pub fn add_geojson(&mut self, payload: &str, color: Option<&str>) -> Result<()> {
        if self.viewport.center.is_none() {
            let center = geojson::first_coordinate(payload)?;
            self.viewport.default_center(center);

            #[cfg(feature = "debug")]
            log::debug!("derived map center {:?} from GeoJSON payload", center);
        }
        self.features
            .overlays
            .push(GeoJsonOverlay::new(payload, color));
        Ok(())
    }

    /// Attaches hover text to the element `id` of the given kind.
    pub fn set_tooltip(
        &mut self,
        kind: ElementKind,
        id: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        self.features.annotations_mut(kind, id)?.tooltip = Some(text.into());
        Ok(())
    }

    /// Attaches click-popup text to the element `id` of the given kind.
    pub fn set_popup(
        &mut self,
        kind: ElementKind,
        id: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        self.features.annotations_mut(kind, id)?.popup = Some(text.into());
        Ok(())
    }

    /// Makes a click on the element write `text` into the side div emitted
    /// by [`render::on_click_div`].
    pub fn set_click_text(
        &mut self,
        kind: ElementKind,
        id: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        self.features.annotations_mut(kind, id)?.on_click = Some(text.into());
        Ok(())
    }

    /// Total number of accumulated features across all groups.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// The current map center, if any was set or derived.
    pub fn center(&self) -> Option<LatLng> {
        self.viewport.center
    }

    /// Renders the container div and its inline script.
    ///
    /// The builder is not consumed; rendering twice yields identical output.
    pub fn render(&self) -> Result<String> {
        render::render(&self.config, &self.viewport, &self.features)
    }
}
