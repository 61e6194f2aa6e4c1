use crate::conf::Conf;
use crate::coords::LatLng;
use crate::overlay::LocationCircle;
use crate::view::MapView;
use crate::Result;
use std::time::Duration;
use tracing::info;

#[derive(Clone, Copy, Debug)]
pub struct LocateOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl LocateOptions {
    pub fn from_conf(conf: &Conf) -> Self {
        LocateOptions {
            high_accuracy: conf.locate_high_accuracy,
            timeout: conf.locate_timeout,
            maximum_age: conf.locate_maximum_age,
        }
    }
}

/// Seam over the platform's position capability. A source that can't
/// provide a fix returns an error describing why.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    async fn current_position(&self, opts: LocateOptions) -> Result<LatLng>;
}

/// Best-effort self location: recenter on the fix, create or reuse the
/// self marker and replace the fixed-radius circle around it.
pub async fn locate<S: PositionSource>(
    view: &mut MapView,
    source: &S,
    conf: &Conf,
) -> Result<LatLng> {
    let fix = source
        .current_position(LocateOptions::from_conf(conf))
        .await?;
    view.set_view(fix, conf.default_zoom);
    view.markers.ensure_self(fix, "You are here");
    view.overlays.set_circle(LocationCircle {
        center: fix,
        radius_m: conf.self_circle_radius_m,
    });
    info!(lat = fix.lat, lon = fix.lon, "Got position fix");
    Ok(fix)
}
