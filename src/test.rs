use crate::conf::Conf;
use crate::coords::LatLng;
use crate::locate::{LocateOptions, PositionSource};
use crate::search::GeocodeResult;
use crate::view::MapView;
use crate::{Error, Result};

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn mock_view() -> MapView {
    MapView::new(&Conf::default())
}

pub fn geocode_results(entries: &[(f64, f64, &str)]) -> Vec<GeocodeResult> {
    entries
        .iter()
        .map(|(lat, lon, display_name)| GeocodeResult {
            lat: *lat,
            lon: *lon,
            display_name: (*display_name).to_owned(),
        })
        .collect()
}

pub struct FixedPosition(pub LatLng);

impl PositionSource for FixedPosition {
    async fn current_position(&self, _opts: LocateOptions) -> Result<LatLng> {
        Ok(self.0)
    }
}

pub struct UnavailablePosition;

impl PositionSource for UnavailablePosition {
    async fn current_position(&self, _opts: LocateOptions) -> Result<LatLng> {
        Err(Error::Generic(
            "Geolocation is not supported on this device".into(),
        ))
    }
}
