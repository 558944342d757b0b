use crate::models::LatLng;

/// Geographic centre of India.
pub const DEFAULT_CENTER: LatLng = LatLng::new(22.9734, 78.6569);
pub const DEFAULT_ZOOM: f64 = 5.0;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

pub const PAGE_TITLE: &str = "Trip Page | OpenStreetMap with Pins";
pub const PAGE_DESCRIPTION: &str = "This page shows OpenStreetMap with pinned locations.";

/// Path the dataset is served under.
pub const DATASET_PATH: &str = "/static/temples.json";

/// Static configuration of the map view. Nothing here is derived from data.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub leaflet_js: &'static str,
    pub leaflet_css: &'static str,
    pub height_px: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL,
            attribution: OSM_ATTRIBUTION,
            leaflet_js: LEAFLET_JS,
            leaflet_css: LEAFLET_CSS,
            height_px: 600,
        }
    }
}
