use crate::core::constants::DEFAULT_ZOOM;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Where the map initially looks: an optional center with zoom and an
/// optional bounding box.
///
/// Bounds take precedence over the center at render time, and the auto-fit
/// over drawn features overrides both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: Option<LatLng>,
    /// The zoom level paired with the center
    pub zoom: Option<u8>,
    /// An explicit bounding box to frame instead of center plus zoom
    pub bounds: Option<LatLngBounds>,
}

impl Viewport {
    /// Sets the center, and optionally bounds and zoom, in one call.
    ///
    /// Each call replaces the whole view: a non-empty `bounds` slice must
    /// have exactly 4 elements in [south, north, west, east] order, an empty
    /// slice clears any previously set bounds, and `None` for `zoom` resets
    /// the zoom to the render-time default.
    pub fn set_center(
        &mut self,
        lat: f64,
        lng: f64,
        bounds: &[f64],
        zoom: Option<u8>,
    ) -> Result<()> {
        let parsed = if bounds.is_empty() {
            None
        } else {
            Some(LatLngBounds::from_slice(bounds)?)
        };
        self.center = Some(LatLng::new(lat, lng));
        self.bounds = parsed;
        self.zoom = zoom;
        Ok(())
    }

    /// Adopts `position` as the center unless one was already set.
    ///
    /// Used by the first added circle and the first GeoJSON overlay.
    pub(crate) fn default_center(&mut self, position: LatLng) {
        if self.center.is_none() {
            self.center = Some(position);
        }
    }

    /// True once a center or bounds exist, explicitly or implicitly.
    pub fn is_set(&self) -> bool {
        self.center.is_some() || self.bounds.is_some()
    }

    /// The zoom level emitted alongside the center.
    pub fn zoom_or_default(&self) -> u8 {
        self.zoom.unwrap_or(DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;

    #[test]
    fn test_set_center() {
        let mut viewport = Viewport::default();
        viewport.set_center(40.4168, -3.7038, &[], Some(12)).unwrap();

        assert_eq!(viewport.center, Some(LatLng::new(40.4168, -3.7038)));
        assert_eq!(viewport.zoom, Some(12));
        assert!(viewport.bounds.is_none());
        assert!(viewport.is_set());
    }

    #[test]
    fn test_set_center_rejects_bad_bounds() {
        let mut viewport = Viewport::default();
        let result = viewport.set_center(40.0, -3.0, &[1.0, 2.0], None);

        assert!(matches!(result, Err(MapError::InvalidBounds(2))));
        // A rejected call must not leave partial state behind.
        assert!(!viewport.is_set());
    }

    #[test]
    fn test_empty_bounds_clear_previous_bounds() {
        let mut viewport = Viewport::default();
        viewport
            .set_center(40.5, -3.5, &[40.1, 40.9, -3.9, -3.1], None)
            .unwrap();
        viewport.set_center(41.0, -4.0, &[], None).unwrap();

        assert_eq!(viewport.center, Some(LatLng::new(41.0, -4.0)));
        assert!(viewport.bounds.is_none());
    }

    #[test]
    fn test_default_center_only_applies_once() {
        let mut viewport = Viewport::default();
        viewport.default_center(LatLng::new(41.0, -3.5));
        viewport.default_center(LatLng::new(42.0, -4.0));

        assert_eq!(viewport.center, Some(LatLng::new(41.0, -3.5)));
    }

    #[test]
    fn test_zoom_defaults_to_15() {
        let mut viewport = Viewport::default();
        viewport.set_center(40.0, -3.0, &[], None).unwrap();

        assert_eq!(viewport.zoom_or_default(), 15);
    }
}
