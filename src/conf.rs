use crate::coords::LatLng;
use std::time::Duration;

/// Every external endpoint and tunable the tool relies on, with the
/// stock OpenStreetMap defaults.
#[derive(Clone, Debug)]
pub struct Conf {
    pub nominatim_url: String,
    pub osrm_url: String,
    pub tile_url_template: String,
    pub tile_max_zoom: u8,
    pub tile_attribution: String,
    pub geocode_limit: u32,
    pub self_circle_radius_m: f64,
    pub area_offset_deg: f64,
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub locate_high_accuracy: bool,
    pub locate_timeout: Duration,
    pub locate_maximum_age: Duration,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            nominatim_url: "https://nominatim.openstreetmap.org/search".into(),
            osrm_url: "https://router.project-osrm.org/route/v1/driving".into(),
            tile_url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            tile_max_zoom: 19,
            tile_attribution: "© OpenStreetMap contributors".into(),
            geocode_limit: 10,
            self_circle_radius_m: 20_000.0,
            area_offset_deg: 0.01,
            default_center: LatLng::new(51.505, -0.09),
            default_zoom: 13,
            locate_high_accuracy: true,
            locate_timeout: Duration::from_millis(5000),
            locate_maximum_age: Duration::ZERO,
        }
    }
}
