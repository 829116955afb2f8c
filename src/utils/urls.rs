use crate::error::TrafficError;
use crate::models::view::MapViewRequest;
use url::Url;

pub const OSM_EMBED_URL: &str = "https://www.openstreetmap.org/export/embed.html";

/// Zoom level and layer code used by the "View Larger Map" link
const LARGE_MAP_ZOOM: u8 = 10;
const LARGE_MAP_LAYERS: &str = "M";
const EMBED_LAYER: &str = "mapnik";

/// Checks a map service base URL and returns its normalised form. The query
/// string is appended verbatim, so the base must be a plain http(s) URL
/// without a query or fragment of its own.
pub fn parse_base_url(raw: &str) -> Result<String, TrafficError> {
    let invalid = |reason: &str| TrafficError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() {
        return Err(invalid("must not carry a query string"));
    }
    if url.fragment().is_some() {
        return Err(invalid("must not carry a fragment"));
    }
    Ok(url.to_string())
}

/// URL loaded by the iframe: the bbox view with a marker at lat/lon
pub fn embed_url(base: &str, view: &MapViewRequest) -> String {
    format!(
        "{}?bbox={}&marker={},{}&layer={}",
        base, view.bbox, view.lat, view.lon, EMBED_LAYER
    )
}

/// URL behind the "View Larger Map" link
pub fn large_map_url(base: &str, view: &MapViewRequest) -> String {
    format!(
        "{}?mlat={}&mlon={}&zoom={}&layers={}",
        base, view.lat, view.lon, LARGE_MAP_ZOOM, LARGE_MAP_LAYERS
    )
}
