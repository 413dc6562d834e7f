//! Projects accumulated builder state into the output fragment.
//!
//! The pipeline has three stages: resolve the tile source, translate the
//! state into script instructions, then wrap the serialized script into the
//! HTML fragment.

pub mod html;
pub mod script;

// Re-exports for convenience
pub use html::{head_tags, on_click_div};

use crate::core::config::MapConfig;
use crate::core::geo::LatLng;
use crate::core::viewport::Viewport;
use crate::features::shapes::{Annotations, FeatureSet, PolygonGeometry, PolygonPart};
use crate::tiles::{TileProtocol, TileSource};
use crate::{MapError, Result};
use script::{JsCall, JsOptions, JsValue};

/// Renders the fragment for the given state.
///
/// Fails with [`MapError::NothingToDisplay`] when no features were added and
/// no viewport was ever set, and with the custom-tile errors when the
/// selected provider cannot be resolved. Nothing is emitted on failure.
pub(crate) fn render(
    config: &MapConfig,
    viewport: &Viewport,
    features: &FeatureSet,
) -> Result<String> {
    if features.is_empty() && !viewport.is_set() {
        return Err(MapError::NothingToDisplay);
    }
    let source = config.provider.resolve(&config.custom_tiles)?;

    #[cfg(feature = "debug")]
    log::debug!(
        "rendering {} features into container '{}'",
        features.len(),
        config.id
    );

    let mut calls = vec![
        JsCall::function("L.map")
            .bind("map")
            .arg(JsValue::Str(config.id.clone())),
        tile_layer(&source),
    ];

    if let Some(bounds) = &viewport.bounds {
        calls.push(JsCall::function("map.fitBounds").arg(JsValue::Array(vec![
            lat_lng(&bounds.south_west),
            lat_lng(&bounds.north_east),
        ])));
    } else if let Some(center) = &viewport.center {
        calls.push(
            JsCall::function("map.setView")
                .arg(lat_lng(center))
                .arg(JsValue::Num(f64::from(viewport.zoom_or_default()))),
        );
    }

    let mut drawn = Vec::new();

    for (i, marker) in features.markers.iter().enumerate() {
        let name = format!("marker{}", i);
        let call = JsCall::function("L.marker")
            .bind(name.as_str())
            .arg(lat_lng(&marker.position));
        let options = feature_options(&None, None, &marker.annotations);
        calls.push(attach(call, options, &marker.annotations));
        drawn.push(name);
    }

    for (i, circle) in features.circles.iter().enumerate() {
        let name = format!("circle{}", i);
        let call = JsCall::function("L.circle")
            .bind(name.as_str())
            .arg(lat_lng(&circle.center));
        let options = feature_options(&circle.color, circle.radius, &circle.annotations);
        calls.push(attach(call, options, &circle.annotations));
        drawn.push(name);
    }

    for (i, polygon) in features.polygons.iter().enumerate() {
        let name = format!("polygon{}", i);
        let call = JsCall::function("L.polygon")
            .bind(name.as_str())
            .arg(polygon_rings(&polygon.geometry));
        let options = feature_options(&polygon.color, None, &polygon.annotations);
        calls.push(attach(call, options, &polygon.annotations));
        drawn.push(name);
    }

    for (i, polyline) in features.polylines.iter().enumerate() {
        let name = format!("polyline{}", i);
        let call = JsCall::function("L.polyline")
            .bind(name.as_str())
            .arg(swapped_ring(&polyline.path));
        let options = feature_options(&polyline.color, None, &polyline.annotations);
        calls.push(attach(call, options, &polyline.annotations));
        drawn.push(name);
    }

    for (i, overlay) in features.overlays.iter().enumerate() {
        let name = format!("geoJSON{}", i);
        let call = JsCall::function("L.geoJSON")
            .bind(name.as_str())
            .arg(JsValue::Raw(overlay.payload.clone()));
        let options = feature_options(&overlay.color, None, &Annotations::default());
        calls.push(attach(call, options, &Annotations::default()));
        drawn.push(name);
    }

    if !drawn.is_empty() {
        calls.push(
            JsCall::function("L.FeatureGroup")
                .constructed()
                .bind("drawnItems")
                .arg(JsValue::Array(
                    drawn.into_iter().map(JsValue::Raw).collect(),
                )),
        );
        calls.push(
            JsCall::function("map.fitBounds")
                .arg(JsValue::Raw("drawnItems.getBounds()".to_string())),
        );
    }

    let shim = if features.has_click_text() {
        html::ON_CLICK_SHIM
    } else {
        ""
    };
    Ok(html::fragment(config, shim, &script::serialize(&calls)))
}

/// The tile-layer statement for a resolved source.
fn tile_layer(source: &TileSource) -> JsCall {
    let (function, options) = match source.protocol {
        TileProtocol::Xyz => ("L.tileLayer", JsOptions::new()),
        TileProtocol::Wms => (
            "L.tileLayer.wms",
            JsOptions::new().set_opt(
                "layers",
                source.layers.as_ref().map(|l| JsValue::Str(l.clone())),
            ),
        ),
    };
    let options = options
        .set("attribution", JsValue::Str(source.attribution.clone()))
        .set("minZoom", JsValue::Num(f64::from(source.min_zoom)))
        .set("maxZoom", JsValue::Num(f64::from(source.max_zoom)));
    JsCall::function(function)
        .arg(JsValue::Str(source.url.clone()))
        .arg(JsValue::Object(options))
        .method("addTo", vec![JsValue::Raw("map".to_string())])
}

/// `[lat, lng]` for positions stored in latitude/longitude order.
fn lat_lng(position: &LatLng) -> JsValue {
    JsValue::Array(vec![JsValue::Num(position.lat), JsValue::Num(position.lng)])
}

/// Swaps a ring of [lng, lat] pairs into emitted [lat, lng] pairs.
fn swapped_ring(ring: &[[f64; 2]]) -> JsValue {
    JsValue::Array(
        ring.iter()
            .map(|pair| JsValue::Array(vec![JsValue::Num(pair[1]), JsValue::Num(pair[0])]))
            .collect(),
    )
}

/// A part with holes gains one nesting level: [exterior, hole, ...].
fn part_rings(part: &PolygonPart) -> JsValue {
    if part.holes.is_empty() {
        swapped_ring(&part.exterior)
    } else {
        let mut rings = vec![swapped_ring(&part.exterior)];
        rings.extend(part.holes.iter().map(|hole| swapped_ring(hole)));
        JsValue::Array(rings)
    }
}

fn polygon_rings(geometry: &PolygonGeometry) -> JsValue {
    match geometry {
        PolygonGeometry::Ring(ring) => swapped_ring(ring),
        PolygonGeometry::Multi(parts) => {
            JsValue::Array(parts.iter().map(part_rings).collect())
        }
    }
}

/// The inline options object of one feature, in a fixed key order.
fn feature_options(
    color: &Option<String>,
    radius: Option<f64>,
    annotations: &Annotations,
) -> JsOptions {
    JsOptions::new()
        .set_opt("color", color.as_ref().map(|c| JsValue::Str(c.clone())))
        .set_opt("radius", radius.map(JsValue::Num))
        .set_opt(
            "onClickText",
            annotations
                .on_click
                .as_ref()
                .map(|text| JsValue::Str(text.clone())),
        )
}

/// Finishes a feature statement: options, tooltip, popup, click handler,
/// then the add-to-map call, in that order.
fn attach(mut call: JsCall, options: JsOptions, annotations: &Annotations) -> JsCall {
    if !options.is_empty() {
        call = call.arg(JsValue::Object(options));
    }
    if let Some(tooltip) = &annotations.tooltip {
        call = call.method("bindTooltip", vec![JsValue::Str(tooltip.clone())]);
    }
    if let Some(popup) = &annotations.popup {
        call = call.method("bindPopup", vec![JsValue::Str(popup.clone())]);
    }
    if annotations.on_click.is_some() {
        call = call.method(
            "on",
            vec![
                JsValue::Str("click".to_string()),
                JsValue::Raw("onClickShowDiv".to_string()),
            ],
        );
    }
    call.method("addTo", vec![JsValue::Raw("map".to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{CustomTiles, TileProvider};

    #[test]
    fn test_xyz_tile_layer() {
        let source = TileProvider::OpenStreetMap
            .resolve(&CustomTiles::default())
            .unwrap();
        assert_eq!(
            tile_layer(&source).to_string(),
            "L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', \
             {attribution: '&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors', \
             minZoom: 1, maxZoom: 18}).addTo(map);"
        );
    }

    #[test]
    fn test_wms_tile_layer_names_its_layer() {
        let source = TileProvider::Catastro
            .resolve(&CustomTiles::default())
            .unwrap();
        let statement = tile_layer(&source).to_string();
        assert!(statement.starts_with(
            "L.tileLayer.wms('http://ovc.catastro.meh.es/Cartografia/WMS/ServidorWMS.aspx', {layers: 'Catastro', "
        ));
    }

    #[test]
    fn test_ring_pairs_are_swapped() {
        let ring = swapped_ring(&[[-3.9, 40.1], [-3.1, 40.2]]);
        assert_eq!(ring.to_string(), "[[40.1, -3.9], [40.2, -3.1]]");
    }

    #[test]
    fn test_polygon_part_with_holes_nests_once_more() {
        let plain = part_rings(&PolygonPart::new(vec![[0.0, 0.0], [1.0, 0.0]]));
        assert_eq!(plain.to_string(), "[[0, 0], [0, 1]]");

        let holed = part_rings(&PolygonPart::with_holes(
            vec![[0.0, 0.0], [1.0, 0.0]],
            vec![vec![[0.25, 0.25]]],
        ));
        assert_eq!(holed.to_string(), "[[[0, 0], [0, 1]], [[0.25, 0.25]]]");
    }
}
