use crate::coords::LatLng;
use serde::Serialize;
use std::hash::Hash;
use std::hash::Hasher;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MarkerId(pub i64);

/// Follow-up action a marker popup offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MarkerAction {
    MarkRoute,
    MarkArea,
}

#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub id: MarkerId,
    pub position: LatLng,
    pub label: String,
    pub is_self: bool,
    pub actions: Vec<MarkerAction>,
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
