use super::{AreaPolygon, LocationCircle, Route, RouteId};
use crate::coords::LatLng;

/// Drawn routes plus the at-most-one polygon and self circle. Routes
/// accumulate and are only ever cleared together.
#[derive(Debug, Default)]
pub struct OverlayStore {
    routes: Vec<Route>,
    polygon: Option<AreaPolygon>,
    circle: Option<LocationCircle>,
    next_route_id: i64,
}

impl OverlayStore {
    pub fn push_route(&mut self, path: Vec<LatLng>) -> RouteId {
        self.next_route_id += 1;
        let id = RouteId(self.next_route_id);
        self.routes.push(Route { id, path });
        id
    }

    pub fn clear_routes(&mut self) {
        self.routes.clear();
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|it| it.id == id)
    }

    /// Replaces any existing polygon, destroying the previous instance.
    pub fn set_polygon(&mut self, polygon: AreaPolygon) {
        self.polygon = Some(polygon);
    }

    pub fn clear_polygon(&mut self) {
        self.polygon = None;
    }

    pub fn polygon(&self) -> Option<&AreaPolygon> {
        self.polygon.as_ref()
    }

    pub fn set_circle(&mut self, circle: LocationCircle) {
        self.circle = Some(circle);
    }

    pub fn circle(&self) -> Option<&LocationCircle> {
        self.circle.as_ref()
    }
}
