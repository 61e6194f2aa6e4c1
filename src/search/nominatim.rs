use crate::conf::Conf;
use crate::coords::LatLng;
use crate::Result;
use serde::{Deserialize, Deserializer};
use tracing::info;
use url::Url;

/// One geocoding candidate. Nominatim serializes lat/lon as JSON
/// strings, hence the custom parse.
#[derive(Deserialize, Debug, Clone)]
pub struct GeocodeResult {
    #[serde(deserialize_with = "f64_from_string")]
    pub lat: f64,
    #[serde(deserialize_with = "f64_from_string")]
    pub lon: f64,
    pub display_name: String,
}

impl GeocodeResult {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

fn f64_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let str = String::deserialize(deserializer)?;
    str.trim().parse().map_err(serde::de::Error::custom)
}

/// Free-text geocoding, capped at `conf.geocode_limit` candidates.
pub async fn geocode(conf: &Conf, query: &str) -> Result<Vec<GeocodeResult>> {
    let url = Url::parse_with_params(
        &conf.nominatim_url,
        &[
            ("q", query),
            ("format", "json"),
            ("addressdetails", "1"),
            ("limit", &conf.geocode_limit.to_string()),
        ],
    )?;

    let response = reqwest::Client::new().get(url).send().await?;

    info!(http_status_code = ?response.status(), "Got geocoding response");

    let results = response.json::<Vec<GeocodeResult>>().await?;

    info!(results = results.len(), "Fetched geocoding candidates");

    Ok(results)
}
