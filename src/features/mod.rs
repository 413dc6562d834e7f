pub mod geojson;
pub mod shapes;

// Re-exports for convenience
pub use geojson::GeoJsonOverlay;
pub use shapes::{
    Annotations, Circle, ElementKind, FeatureSet, Marker, Polygon, PolygonGeometry, PolygonPart,
    Polyline,
};
