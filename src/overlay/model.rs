use crate::coords::{self, LatLng};
use geo::Rect;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RouteId(pub i64);

/// A polyline path returned by the routing service.
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub path: Vec<LatLng>,
}

impl Route {
    pub fn bounds(&self) -> Option<Rect> {
        coords::bounds(self.path.iter().copied())
    }
}

/// Closed quadrilateral used as a coarse area-of-interest mark.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaPolygon {
    pub ring: [LatLng; 5],
}

impl AreaPolygon {
    /// Fixed-offset ring around a center, first corner repeated to
    /// close the shape.
    pub fn around(center: LatLng, offset: f64) -> Self {
        let LatLng { lat, lon } = center;
        AreaPolygon {
            ring: [
                LatLng::new(lat + offset, lon + offset),
                LatLng::new(lat + offset, lon - offset),
                LatLng::new(lat - offset, lon - offset),
                LatLng::new(lat - offset, lon + offset),
                LatLng::new(lat + offset, lon + offset),
            ],
        }
    }

    pub fn is_closed(&self) -> bool {
        self.ring[0] == self.ring[4]
    }
}

/// Fixed-radius circle drawn around the self position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LocationCircle {
    pub center: LatLng,
    pub radius_m: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn area_ring_is_closed_and_offset() {
        let center = LatLng::new(10.0, 20.0);
        let polygon = AreaPolygon::around(center, 0.01);
        assert!(polygon.is_closed());
        for corner in &polygon.ring[..4] {
            assert!(((corner.lat - center.lat).abs() - 0.01).abs() < 1e-12);
            assert!(((corner.lon - center.lon).abs() - 0.01).abs() < 1e-12);
        }
    }

    #[test]
    fn area_ring_corners_are_distinct() {
        let polygon = AreaPolygon::around(LatLng::new(0.0, 0.0), 0.01);
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(polygon.ring[i], polygon.ring[j]);
            }
        }
    }

    #[test]
    fn route_bounds_cover_path() {
        let route = Route {
            id: RouteId(1),
            path: vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 2.0)],
        };
        let rect = route.bounds().unwrap();
        assert_eq!(rect.max().x, 2.0);
        assert_eq!(rect.max().y, 1.0);
    }

    #[test]
    fn empty_route_has_no_bounds() {
        let route = Route {
            id: RouteId(1),
            path: Vec::new(),
        };
        assert!(route.bounds().is_none());
    }
}
