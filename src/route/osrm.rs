use crate::conf::Conf;
use crate::coords::LatLng;
use crate::Result;
use geo::LineString;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: geojson::Geometry,
}

/// Driving route between two points. `None` when the service knows no
/// route; the path comes back in (lat, lon) order.
pub async fn driving_route(conf: &Conf, from: LatLng, to: LatLng) -> Result<Option<Vec<LatLng>>> {
    let url = format!(
        "{}/{},{};{},{}?overview=full&geometries=geojson",
        conf.osrm_url, from.lon, from.lat, to.lon, to.lat
    );

    let response = reqwest::Client::new().get(&url).send().await?;

    info!(http_status_code = ?response.status(), "Got routing response");

    let response = response.json::<Response>().await?;

    let Some(route) = response.routes.into_iter().next() else {
        return Ok(None);
    };

    let path = path_from_geometry(route.geometry)?;

    info!(points = path.len(), "Fetched route geometry");

    Ok(Some(path))
}

/// GeoJSON keeps [lon, lat] pairs; swap them into LatLng on the way in.
fn path_from_geometry(geometry: geojson::Geometry) -> Result<Vec<LatLng>> {
    let line = LineString::try_from(geometry.value)?;
    Ok(line.coords().map(|it| LatLng::from_coord(*it)).collect())
}
