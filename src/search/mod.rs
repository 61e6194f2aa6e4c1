pub use nominatim::{geocode, GeocodeResult};

mod nominatim;

use crate::conf::Conf;
use crate::coords::LatLng;
use crate::marker::{MarkerAction, MarkerId};
use crate::view::MapView;
use crate::{Error, Result};
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was a literal coordinate pair; one marker placed, no
    /// network call.
    Literal(MarkerId),
    /// Geocoded candidates, one marker each.
    Geocoded { marker_ids: Vec<MarkerId> },
}

/// Exactly two comma-separated numeric tokens, or nothing.
pub fn parse_literal(query: &str) -> Option<LatLng> {
    let tokens: Vec<&str> = query.split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return None;
    }
    let lat = tokens[0].parse().ok()?;
    let lon = tokens[1].parse().ok()?;
    Some(LatLng::new(lat, lon))
}

/// Resolves a free-text or literal coordinate query against the view.
/// Any previous search context (routes, polygon) is dropped first.
pub async fn search(view: &mut MapView, conf: &Conf, query: &str) -> Result<SearchOutcome> {
    view.overlays.clear_routes();
    view.overlays.clear_polygon();

    if let Some(position) = parse_literal(query) {
        let id = view.markers.add(
            position,
            format!("Coordinates: {}, {}", position.lat, position.lon),
        );
        view.set_view(position, conf.default_zoom);
        info!(lat = position.lat, lon = position.lon, "Placed literal coordinate marker");
        return Ok(SearchOutcome::Literal(id));
    }

    let results = nominatim::geocode(conf, query).await?;
    apply_results(view, &results)
}

/// Pure half of `search`: replaces the non-self markers with one marker
/// per candidate and fits the view around them.
pub fn apply_results(view: &mut MapView, results: &[GeocodeResult]) -> Result<SearchOutcome> {
    if results.is_empty() {
        return Err(Error::NotFound("Location not found".into()));
    }

    view.markers.clear_non_self();

    let marker_ids = results
        .iter()
        .map(|it| {
            view.markers.add_with_actions(
                it.position(),
                it.display_name.clone(),
                vec![MarkerAction::MarkRoute, MarkerAction::MarkArea],
            )
        })
        .collect();

    view.fit_markers();

    info!(markers = results.len(), "Placed geocoding results");

    Ok(SearchOutcome::Geocoded { marker_ids })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{geocode_results, mock_view};

    #[test]
    fn literal_with_two_numeric_tokens() {
        assert_eq!(
            Some(LatLng::new(40.7128, -74.0060)),
            parse_literal("40.7128, -74.0060")
        );
        assert_eq!(Some(LatLng::new(1.0, 2.0)), parse_literal("1,2"));
    }

    #[test]
    fn literal_rejects_everything_else() {
        assert_eq!(None, parse_literal("New York"));
        assert_eq!(None, parse_literal("1,2,3"));
        assert_eq!(None, parse_literal("40.7128"));
        assert_eq!(None, parse_literal("abc, 1.0"));
        assert_eq!(None, parse_literal(","));
        assert_eq!(None, parse_literal(""));
    }

    #[tokio::test]
    async fn literal_search_places_one_marker_without_network() {
        // Unroutable conf URL proves no request is issued.
        let mut conf = Conf::default();
        conf.nominatim_url = "http://invalid.localhost/search".into();
        let mut view = mock_view();
        let outcome = search(&mut view, &conf, "40.7128, -74.0060").await.unwrap();
        let SearchOutcome::Literal(id) = outcome else {
            panic!("expected literal outcome");
        };
        assert_eq!(1, view.markers.len());
        let marker = view.markers.get(id).unwrap();
        assert_eq!(LatLng::new(40.7128, -74.0060), marker.position);
        assert_eq!(marker.position, view.viewport.center);
    }

    #[tokio::test]
    async fn search_clears_previous_routes_and_polygon() {
        let conf = Conf::default();
        let mut view = mock_view();
        view.overlays.push_route(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]);
        view.mark_area(LatLng::new(0.0, 0.0), &conf);
        search(&mut view, &conf, "1, 2").await.unwrap();
        assert!(view.overlays.routes().is_empty());
        assert!(view.overlays.polygon().is_none());
    }

    #[test]
    fn empty_result_set_is_not_found() {
        let mut view = mock_view();
        let res = apply_results(&mut view, &[]);
        assert!(matches!(res, Err(Error::NotFound(_))));
    }

    #[test]
    fn results_replace_non_self_markers_and_offer_actions() {
        let mut view = mock_view();
        view.markers.ensure_self(LatLng::new(0.0, 0.0), "You are here");
        view.markers.add(LatLng::new(9.0, 9.0), "stale");
        let results = geocode_results(&[(40.0, -74.0, "New York"), (43.0, -75.5, "New York State")]);
        let outcome = apply_results(&mut view, &results).unwrap();
        let SearchOutcome::Geocoded { marker_ids } = outcome else {
            panic!("expected geocoded outcome");
        };
        assert_eq!(2, marker_ids.len());
        // Self marker survives, the stale one is gone.
        assert_eq!(3, view.markers.len());
        assert!(view.markers.self_marker().is_some());
        let marker = view.markers.get(marker_ids[0]).unwrap();
        assert_eq!("New York", marker.label);
        assert_eq!(
            vec![MarkerAction::MarkRoute, MarkerAction::MarkArea],
            marker.actions
        );
    }
}
