//! Fixed HTML pieces around the generated script.

use crate::core::config::MapConfig;

/// The `<link>` and `<script>` tags loading Leaflet from its CDN, pinned by
/// version and integrity hash. Emit once inside the page's `<head>`.
pub fn head_tags() -> &'static str {
    "\t<link rel='stylesheet' href='https://unpkg.com/leaflet@1.7.1/dist/leaflet.css' integrity='sha512-xodZBNTC5n17Xt2atTPuE1HxjVMSvLVW9ocqUKLsCC5CXdbqCmblAshOMAS6/keqq/sMZMZ19scR4PsZChSR7A==' crossorigin=''/>\n    <script src='https://unpkg.com/leaflet@1.7.1/dist/leaflet.js' integrity='sha512-XQoYMqMTK8LvdxXYG3nZ448hOEQiglfqkJs1NOQV44cWnUrBc8PkAOcXy20w0vlaXaVUearIOBhiXZ5V3ynxwA==' crossorigin=''></script>\n"
}

/// The placeholder div the shared click handler writes into. Include it
/// anywhere in the page when click texts are used.
pub fn on_click_div() -> &'static str {
    "<div id='onClickDiv'></div>\n"
}

/// The shared click handler, emitted at most once at the top of the script
/// block.
pub(crate) const ON_CLICK_SHIM: &str = "function onClickShowDiv(e) { document.getElementById('onClickDiv').innerHTML= this.options.onClickText; }\n";

/// Wraps the script into the final fragment: container div, then the script
/// block with the shim (possibly empty) ahead of the statements.
pub(crate) fn fragment(config: &MapConfig, shim: &str, script: &str) -> String {
    format!(
        "<div id='{}' style='{}'></div>\n<script>{}{}</script>\n",
        config.id,
        config.div_style(),
        shim,
        script
    )
}
