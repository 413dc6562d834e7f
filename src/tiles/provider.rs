//! The tile provider table
//!
//! Each built-in provider maps to a protocol, a URL, an attribution string
//! and a zoom range. One extra provider, `Custom`, reads all of that from
//! caller-supplied [`CustomTiles`] instead.

use crate::core::constants::{PROVIDER_MAX_ZOOM, PROVIDER_MIN_ZOOM};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a tile layer is attached to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileProtocol {
    /// Slippy-map URL template with `{z}`/`{x}`/`{y}` (and optionally `{s}`)
    /// placeholders.
    Xyz,
    /// WMS endpoint queried for a named layer.
    Wms,
}

/// Built-in tile providers, selectable by name or numeric id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileProvider {
    /// OpenStreetMap standard tiles.
    #[default]
    OpenStreetMap,
    /// IGN (Spain) base cartography.
    IdeeBase,
    /// PNOA (Spain) aerial imagery.
    IdeeSatellite,
    /// Spanish cadastre WMS.
    Catastro,
    /// Caller-supplied tile server, configured through [`CustomTiles`].
    Custom,
}

impl TileProvider {
    /// Resolves a numeric provider id as used in stored configuration.
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Self::OpenStreetMap),
            1 => Ok(Self::IdeeBase),
            2 => Ok(Self::IdeeSatellite),
            3 => Ok(Self::Catastro),
            4 => Ok(Self::Custom),
            other => Err(MapError::InvalidTileSelection(other.to_string())),
        }
    }

    /// The numeric id of this provider.
    pub fn id(&self) -> u8 {
        match self {
            Self::OpenStreetMap => 0,
            Self::IdeeBase => 1,
            Self::IdeeSatellite => 2,
            Self::Catastro => 3,
            Self::Custom => 4,
        }
    }

    /// Resolves this provider into concrete tile-layer parameters.
    ///
    /// The built-in providers ignore `custom`; [`TileProvider::Custom`]
    /// fails with [`MapError::TileConfigurationMissing`] unless every field
    /// of `custom` is populated.
    pub fn resolve(&self, custom: &CustomTiles) -> Result<TileSource> {
        match self {
            Self::OpenStreetMap => Ok(TileSource::xyz(
                "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
                PROVIDER_MIN_ZOOM,
                PROVIDER_MAX_ZOOM,
            )),
            Self::IdeeBase => Ok(TileSource::xyz(
                "https://tms-ign-base.idee.es/1.0.0/IGNBaseTodo/{z}/{x}/{y}.jpeg",
                "CC BY 4.0 <a href=\"https://www.ign.es\">ign.es</a>",
                PROVIDER_MIN_ZOOM,
                // The IGN base TMS serves nothing past zoom 17.
                17,
            )),
            Self::IdeeSatellite => Ok(TileSource::xyz(
                "https://tms-pnoa-ma.idee.es/1.0.0/pnoa-ma/{z}/{x}/{y}.jpeg",
                "CC BY 4.0 <a href=\"https://www.ign.es\">ign.es</a>",
                PROVIDER_MIN_ZOOM,
                PROVIDER_MAX_ZOOM,
            )),
            Self::Catastro => Ok(TileSource::wms(
                "http://ovc.catastro.meh.es/Cartografia/WMS/ServidorWMS.aspx",
                "Catastro",
                "&copy; <a href=\"http://ovc.catastro.meh.es/\">Dirección General del Catastro</a>",
                PROVIDER_MIN_ZOOM,
                PROVIDER_MAX_ZOOM,
            )),
            Self::Custom => custom.resolve(),
        }
    }
}

impl fmt::Display for TileProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileProvider::OpenStreetMap => write!(f, "openstreetmap"),
            TileProvider::IdeeBase => write!(f, "idee-base"),
            TileProvider::IdeeSatellite => write!(f, "idee-satellite"),
            TileProvider::Catastro => write!(f, "catastro"),
            TileProvider::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for TileProvider {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "openstreetmap" | "osm" => Ok(Self::OpenStreetMap),
            "idee-base" => Ok(Self::IdeeBase),
            "idee-satellite" => Ok(Self::IdeeSatellite),
            "catastro" => Ok(Self::Catastro),
            "custom" => Ok(Self::Custom),
            other => Err(MapError::InvalidTileSelection(other.to_string())),
        }
    }
}

/// Parameters for a caller-supplied tile server.
///
/// Every field must be populated before a map selecting
/// [`TileProvider::Custom`] can render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomTiles {
    /// Host name of the tile server, without scheme.
    pub host: Option<String>,
    /// URL path template on that host, starting with `/`.
    pub path: Option<String>,
    /// Attribution text shown on the map.
    pub attribution: Option<String>,
    pub min_zoom: Option<u8>,
    pub max_zoom: Option<u8>,
}

impl CustomTiles {
    /// Creates a fully-populated custom tile configuration.
    pub fn new(
        host: impl Into<String>,
        path: impl Into<String>,
        attribution: impl Into<String>,
        min_zoom: u8,
        max_zoom: u8,
    ) -> Self {
        Self {
            host: Some(host.into()),
            path: Some(path.into()),
            attribution: Some(attribution.into()),
            min_zoom: Some(min_zoom),
            max_zoom: Some(max_zoom),
        }
    }

    /// Sets the tile server host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the URL path template.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the attribution text.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    /// Sets the advertised zoom range.
    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }

    /// True when every required parameter is present.
    pub fn is_complete(&self) -> bool {
        self.host.is_some()
            && self.path.is_some()
            && self.attribution.is_some()
            && self.min_zoom.is_some()
            && self.max_zoom.is_some()
    }

    pub(crate) fn resolve(&self) -> Result<TileSource> {
        match (
            &self.host,
            &self.path,
            &self.attribution,
            self.min_zoom,
            self.max_zoom,
        ) {
            (Some(host), Some(path), Some(attribution), Some(min_zoom), Some(max_zoom)) => {
                Ok(TileSource::xyz(
                    format!("https://{}{}", host, path),
                    attribution.clone(),
                    min_zoom,
                    max_zoom,
                ))
            }
            _ => Err(MapError::TileConfigurationMissing),
        }
    }
}

/// Concrete parameters of one tile layer, ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub protocol: TileProtocol,
    pub url: String,
    /// WMS layer name, present only for [`TileProtocol::Wms`].
    pub layers: Option<String>,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl TileSource {
    fn xyz(
        url: impl Into<String>,
        attribution: impl Into<String>,
        min_zoom: u8,
        max_zoom: u8,
    ) -> Self {
        Self {
            protocol: TileProtocol::Xyz,
            url: url.into(),
            layers: None,
            attribution: attribution.into(),
            min_zoom,
            max_zoom,
        }
    }

    fn wms(
        url: impl Into<String>,
        layers: impl Into<String>,
        attribution: impl Into<String>,
        min_zoom: u8,
        max_zoom: u8,
    ) -> Self {
        Self {
            protocol: TileProtocol::Wms,
            url: url.into(),
            layers: Some(layers.into()),
            attribution: attribution.into(),
            min_zoom,
            max_zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids_round_trip() {
        for id in 0..=4 {
            let provider = TileProvider::from_id(id).unwrap();
            assert_eq!(provider.id(), id);
        }
    }

    #[test]
    fn test_unknown_provider_id() {
        let result = TileProvider::from_id(5);
        assert!(matches!(result, Err(MapError::InvalidTileSelection(_))));
    }

    #[test]
    fn test_unknown_provider_name() {
        let result: Result<TileProvider> = "mapbox".parse();
        assert!(matches!(result, Err(MapError::InvalidTileSelection(_))));
    }

    #[test]
    fn test_default_provider_is_openstreetmap() {
        assert_eq!(TileProvider::default(), TileProvider::OpenStreetMap);
    }

    #[test]
    fn test_openstreetmap_source() {
        let source = TileProvider::OpenStreetMap
            .resolve(&CustomTiles::default())
            .unwrap();

        assert_eq!(source.protocol, TileProtocol::Xyz);
        assert_eq!(source.url, "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png");
        assert_eq!(source.min_zoom, 1);
        assert_eq!(source.max_zoom, 18);
        assert!(source.layers.is_none());
    }

    #[test]
    fn test_idee_base_caps_zoom_at_17() {
        let source = TileProvider::IdeeBase
            .resolve(&CustomTiles::default())
            .unwrap();
        assert_eq!(source.max_zoom, 17);
    }

    #[test]
    fn test_catastro_is_wms() {
        let source = TileProvider::Catastro
            .resolve(&CustomTiles::default())
            .unwrap();

        assert_eq!(source.protocol, TileProtocol::Wms);
        assert_eq!(source.layers.as_deref(), Some("Catastro"));
    }

    #[test]
    fn test_custom_requires_all_parameters() {
        let partial = CustomTiles::default()
            .with_host("tiles.example.org")
            .with_path("/osm/{z}/{x}/{y}.png");
        let result = TileProvider::Custom.resolve(&partial);

        assert!(!partial.is_complete());
        assert!(matches!(result, Err(MapError::TileConfigurationMissing)));
    }

    #[test]
    fn test_custom_source_joins_host_and_path() {
        let custom = CustomTiles::new(
            "tiles.example.org",
            "/osm/{z}/{x}/{y}.png",
            "&copy; Example",
            1,
            19,
        );
        let source = TileProvider::Custom.resolve(&custom).unwrap();

        assert!(custom.is_complete());
        assert_eq!(source.url, "https://tiles.example.org/osm/{z}/{x}/{y}.png");
        assert_eq!(source.attribution, "&copy; Example");
        assert_eq!(source.max_zoom, 19);
    }
}
