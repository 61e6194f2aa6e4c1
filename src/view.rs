use crate::conf::Conf;
use crate::coords::{self, LatLng};
use crate::marker::MarkerStore;
use crate::overlay::{AreaPolygon, OverlayStore};
use geo::Rect;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

#[derive(Clone, Debug)]
pub struct TileLayer {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

/// Single owner of everything drawn on the map: viewport, markers,
/// routes, polygon and the self circle.
#[derive(Debug)]
pub struct MapView {
    pub viewport: Viewport,
    pub tiles: TileLayer,
    pub markers: MarkerStore,
    pub overlays: OverlayStore,
}

impl MapView {
    pub fn new(conf: &Conf) -> Self {
        MapView {
            viewport: Viewport {
                center: conf.default_center,
                zoom: conf.default_zoom,
            },
            tiles: TileLayer {
                url_template: conf.tile_url_template.clone(),
                max_zoom: conf.tile_max_zoom,
                attribution: conf.tile_attribution.clone(),
            },
            markers: MarkerStore::default(),
            overlays: OverlayStore::default(),
        }
    }

    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.viewport = Viewport { center, zoom };
    }

    /// Recenters on the rect and picks the largest zoom that still
    /// shows all of it.
    pub fn fit_bounds(&mut self, rect: Rect) {
        self.viewport = Viewport {
            center: LatLng::from_coord(rect.center()),
            zoom: coords::zoom_for_bounds(&rect, self.tiles.max_zoom),
        };
    }

    pub fn fit_markers(&mut self) {
        if let Some(rect) = self.markers.bounds() {
            self.fit_bounds(rect);
        }
    }

    /// Replaces the active polygon with a fixed-offset quadrilateral
    /// centered on the given point.
    pub fn mark_area(&mut self, center: LatLng, conf: &Conf) -> AreaPolygon {
        let polygon = AreaPolygon::around(center, conf.area_offset_deg);
        self.overlays.set_polygon(polygon.clone());
        info!(
            lat = center.lat,
            lon = center.lon,
            "Area marked around the selected location"
        );
        polygon
    }
}
