use super::{Marker, MarkerAction, MarkerId};
use crate::coords::{self, LatLng};
use geo::Rect;

/// Ordered collection of placed point annotations. At most one entry is
/// the self marker and it survives every bulk clear.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    next_id: i64,
}

impl MarkerStore {
    pub fn add(&mut self, position: LatLng, label: impl Into<String>) -> MarkerId {
        self.insert(position, label.into(), false, Vec::new())
    }

    pub fn add_with_actions(
        &mut self,
        position: LatLng,
        label: impl Into<String>,
        actions: Vec<MarkerAction>,
    ) -> MarkerId {
        self.insert(position, label.into(), false, actions)
    }

    /// Creates the self marker if it doesn't exist yet, otherwise
    /// returns the existing one untouched.
    pub fn ensure_self(&mut self, position: LatLng, label: impl Into<String>) -> MarkerId {
        if let Some(marker) = self.markers.iter().find(|it| it.is_self) {
            return marker.id;
        }
        self.insert(position, label.into(), true, Vec::new())
    }

    fn insert(
        &mut self,
        position: LatLng,
        label: String,
        is_self: bool,
        actions: Vec<MarkerAction>,
    ) -> MarkerId {
        self.next_id += 1;
        let id = MarkerId(self.next_id);
        self.markers.push(Marker {
            id,
            position,
            label,
            is_self,
            actions,
        });
        id
    }

    pub fn clear_non_self(&mut self) {
        self.markers.retain(|it| it.is_self);
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|it| it.id == id)
    }

    pub fn self_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|it| it.is_self)
    }

    pub fn self_position(&self) -> Option<LatLng> {
        self.self_marker().map(|it| it.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn bounds(&self) -> Option<Rect> {
        coords::bounds(self.markers.iter().map(|it| it.position))
    }
}
