pub mod provider;

// Re-exports for convenience
pub use provider::{CustomTiles, TileProtocol, TileProvider, TileSource};
