//! Defaults shared by the builder, the tile table and the renderer.
//! Keeping them in a single place makes it easier to tweak crate-wide magic numbers.

/// Zoom level emitted when a center exists but no zoom was given.
pub const DEFAULT_ZOOM: u8 = 15;

/// Default pixel height of the container div.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Default pixel width of the container div.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default DOM id of the container div.
pub const DEFAULT_MAP_ID: &str = "map";

/// Lowest zoom advertised for the built-in tile providers.
pub const PROVIDER_MIN_ZOOM: u8 = 1;

/// Highest zoom advertised for the built-in tile providers.
pub const PROVIDER_MAX_ZOOM: u8 = 18;
