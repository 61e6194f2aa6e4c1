pub use osrm::driving_route;

mod osrm;

use crate::conf::Conf;
use crate::coords::{self, LatLng};
use crate::overlay::RouteId;
use crate::view::MapView;
use crate::{Error, Result};
use tracing::info;

/// Draws a driving route from the self position to the target. Needs a
/// self marker; without one the user is told to enable location
/// services.
pub async fn mark_route(view: &mut MapView, conf: &Conf, target: LatLng) -> Result<RouteId> {
    let Some(origin) = view.markers.self_position() else {
        return Err(Error::InvalidInput(
            "Your location is not available. Please enable location services.".into(),
        ));
    };

    let Some(path) = osrm::driving_route(conf, origin, target).await? else {
        return Err(Error::NotFound("No route found".into()));
    };

    Ok(apply_route(view, path))
}

/// Pure half of `mark_route`: appends the path to the route store and
/// fits the view around it.
pub fn apply_route(view: &mut MapView, path: Vec<LatLng>) -> RouteId {
    let rect = coords::bounds(path.iter().copied());
    let id = view.overlays.push_route(path);
    if let Some(rect) = rect {
        view.fit_bounds(rect);
    }
    info!("Route marked successfully");
    id
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mock_view;

    #[tokio::test]
    async fn mark_route_requires_self_position() {
        let conf = Conf::default();
        let mut view = mock_view();
        let res = mark_route(&mut view, &conf, LatLng::new(1.0, 1.0)).await;
        assert!(matches!(res, Err(Error::InvalidInput(_))));
        assert!(view.overlays.routes().is_empty());
    }

    #[test]
    fn apply_route_appends_and_fits_view() {
        let mut view = mock_view();
        let first = apply_route(
            &mut view,
            vec![LatLng::new(0.0, 0.0), LatLng::new(2.0, 4.0)],
        );
        let second = apply_route(
            &mut view,
            vec![LatLng::new(10.0, 10.0), LatLng::new(12.0, 12.0)],
        );
        assert_ne!(first, second);
        assert_eq!(2, view.overlays.routes().len());
        // Viewport follows the most recent route.
        assert_eq!(LatLng::new(11.0, 11.0), view.viewport.center);
    }

    #[test]
    fn apply_route_with_empty_path_keeps_viewport() {
        let mut view = mock_view();
        let before = view.viewport;
        apply_route(&mut view, Vec::new());
        assert_eq!(before, view.viewport);
        assert_eq!(1, view.overlays.routes().len());
    }
}
