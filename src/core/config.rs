//! Configuration for one map fragment
//!
//! This module holds the static parts of a map description: the container
//! div and the tile layer behind the features.

use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_MAP_ID, DEFAULT_WIDTH};
use crate::tiles::{CustomTiles, TileProvider};
use serde::{Deserialize, Serialize};

/// Container and tile settings of a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// DOM id of the container div. Must be unique within the page.
    pub id: String,
    /// Container height in pixels.
    pub height: u32,
    /// Container width in pixels.
    pub width: u32,
    /// Extra inline CSS appended after the sizing rules.
    pub style: Option<String>,
    /// Which tile layer backs the map.
    pub provider: TileProvider,
    /// Parameters used when `provider` is [`TileProvider::Custom`].
    pub custom_tiles: CustomTiles,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_MAP_ID.to_string(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            style: None,
            provider: TileProvider::default(),
            custom_tiles: CustomTiles::default(),
        }
    }
}

impl MapConfig {
    /// Inline style of the container div: sizing first, then any extra CSS.
    pub fn div_style(&self) -> String {
        match &self.style {
            Some(extra) => format!(
                "height: {}px; width: {}px; {}",
                self.height, self.width, extra
            ),
            None => format!("height: {}px; width: {}px", self.height, self.width),
        }
    }
}
