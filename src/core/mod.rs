pub mod builder;
pub mod config;
pub mod constants;
pub mod geo;
pub mod viewport;

// Re-exports for convenience
pub use builder::MapBuilder;
pub use config::MapConfig;
pub use geo::{LatLng, LatLngBounds};
pub use viewport::Viewport;
