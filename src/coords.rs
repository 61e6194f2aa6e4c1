use geo::{coord, Coord, Rect};
use serde::{Deserialize, Serialize};

/// A position in the (latitude, longitude) order the map layer speaks.
/// `geo` geometry keeps the opposite (x = lon, y = lat) pairing, so all
/// conversions funnel through here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLng { lat, lon }
    }

    pub fn to_coord(self) -> Coord {
        coord! { x: self.lon, y: self.lat }
    }

    pub fn from_coord(coord: Coord) -> Self {
        LatLng {
            lat: coord.y,
            lon: coord.x,
        }
    }
}

pub fn bounds(points: impl IntoIterator<Item = LatLng>) -> Option<Rect> {
    let mut points = points.into_iter();
    let first = points.next()?.to_coord();
    let mut min = first;
    let mut max = first;
    for point in points {
        let coord = point.to_coord();
        min.x = min.x.min(coord.x);
        min.y = min.y.min(coord.y);
        max.x = max.x.max(coord.x);
        max.y = max.y.max(coord.y);
    }
    Some(Rect::new(min, max))
}

/// Largest zoom at which the rect's longer span still fits a single
/// 360° / 2^z tile span.
pub fn zoom_for_bounds(rect: &Rect, max_zoom: u8) -> u8 {
    let span = rect.width().max(rect.height());
    if span <= f64::EPSILON {
        return max_zoom;
    }
    let zoom = (360.0 / span).log2().floor();
    zoom.clamp(0.0, max_zoom as f64) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds_of_nothing() {
        assert!(bounds([]).is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let rect = bounds([
            LatLng::new(10.0, -5.0),
            LatLng::new(-2.0, 7.0),
            LatLng::new(4.0, 1.0),
        ])
        .unwrap();
        assert_eq!(rect.min().x, -5.0);
        assert_eq!(rect.min().y, -2.0);
        assert_eq!(rect.max().x, 7.0);
        assert_eq!(rect.max().y, 10.0);
    }

    #[test]
    fn zoom_shrinks_as_span_grows() {
        let tight = bounds([LatLng::new(0.0, 0.0), LatLng::new(0.01, 0.01)]).unwrap();
        let wide = bounds([LatLng::new(0.0, 0.0), LatLng::new(40.0, 40.0)]).unwrap();
        assert!(zoom_for_bounds(&tight, 19) > zoom_for_bounds(&wide, 19));
    }

    #[test]
    fn zoom_for_single_point_is_max() {
        let rect = bounds([LatLng::new(1.0, 1.0)]).unwrap();
        assert_eq!(19, zoom_for_bounds(&rect, 19));
    }
}
