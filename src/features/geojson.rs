//! Raw GeoJSON overlays and the implicit-center extraction.

use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GeoJSON document passed through to the page untouched.
///
/// The payload is never re-encoded for rendering; only the implicit-center
/// extraction looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonOverlay {
    pub payload: String,
    pub color: Option<String>,
}

impl GeoJsonOverlay {
    pub fn new(payload: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            payload: payload.into(),
            color: color.map(str::to_owned),
        }
    }
}

/// Extracts the first coordinate pair of a GeoJSON document.
///
/// Looks at the first geometry (a GeometryCollection's first entry, a
/// Feature's geometry, or the document itself) and descends into its
/// `coordinates` until a [lng, lat] pair appears. This is a best-effort
/// heuristic for implicit centering, not a GeoJSON parser; any other shape
/// fails with [`MapError::UnsupportedGeoJsonShape`].
pub(crate) fn first_coordinate(payload: &str) -> Result<LatLng> {
    let doc: Value =
        serde_json::from_str(payload).map_err(|_| MapError::UnsupportedGeoJsonShape)?;

    let geometry = if let Some(collection) = doc.get("geometries") {
        collection.get(0).ok_or(MapError::UnsupportedGeoJsonShape)?
    } else if let Some(geometry) = doc.get("geometry") {
        geometry
    } else {
        &doc
    };

    let mut cursor = geometry
        .get("coordinates")
        .ok_or(MapError::UnsupportedGeoJsonShape)?;
    while let Some(first) = cursor.get(0) {
        if !first.is_array() {
            break;
        }
        cursor = first;
    }
    coordinate_pair(cursor).ok_or(MapError::UnsupportedGeoJsonShape)
}

fn coordinate_pair(value: &Value) -> Option<LatLng> {
    let lng = value.get(0)?.as_f64()?;
    let lat = value.get(1)?.as_f64()?;
    Some(LatLng::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_coordinates() {
        let center =
            first_coordinate(r#"{"type": "Point", "coordinates": [-3.7038, 40.4168]}"#).unwrap();
        assert_eq!(center, LatLng::new(40.4168, -3.7038));
    }

    #[test]
    fn test_polygon_descends_to_first_pair() {
        let payload = r#"{
            "type": "Polygon",
            "coordinates": [[[-3.9, 40.1], [-3.1, 40.1], [-3.1, 40.9], [-3.9, 40.1]]]
        }"#;
        assert_eq!(
            first_coordinate(payload).unwrap(),
            LatLng::new(40.1, -3.9)
        );
    }

    #[test]
    fn test_feature_wrapped_geometry() {
        let payload = r#"{
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "LineString", "coordinates": [[2.17, 41.38], [2.19, 41.40]]}
        }"#;
        assert_eq!(
            first_coordinate(payload).unwrap(),
            LatLng::new(41.38, 2.17)
        );
    }

    #[test]
    fn test_geometry_collection_uses_first_entry() {
        let payload = r#"{
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [-0.98, 37.60]},
                {"type": "Point", "coordinates": [0.0, 0.0]}
            ]
        }"#;
        assert_eq!(
            first_coordinate(payload).unwrap(),
            LatLng::new(37.60, -0.98)
        );
    }

    #[test]
    fn test_rejects_shapes_without_coordinates() {
        let collection = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(matches!(
            first_coordinate(collection),
            Err(MapError::UnsupportedGeoJsonShape)
        ));

        let empty = r#"{"type": "Point", "coordinates": []}"#;
        assert!(matches!(
            first_coordinate(empty),
            Err(MapError::UnsupportedGeoJsonShape)
        ));

        assert!(matches!(
            first_coordinate("not json at all"),
            Err(MapError::UnsupportedGeoJsonShape)
        ));
    }

    #[test]
    fn test_rejects_non_numeric_pair() {
        let payload = r#"{"type": "Point", "coordinates": ["-3.7", "40.4"]}"#;
        assert!(matches!(
            first_coordinate(payload),
            Err(MapError::UnsupportedGeoJsonShape)
        ));
    }
}
