use serde::Serialize;
use std::hash::Hash;
use std::hash::Hasher;
use uuid::Uuid;

/// Synthetic stable id. Entries with identical (name, lat, lon) values
/// stay distinguishable through edits and deletes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CoordinateId(pub Uuid);

impl CoordinateId {
    pub fn new() -> Self {
        CoordinateId(Uuid::new_v4())
    }
}

impl Default for CoordinateId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct NamedCoordinate {
    pub id: CoordinateId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl NamedCoordinate {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        NamedCoordinate {
            id: CoordinateId::new(),
            name: name.into(),
            lat,
            lon,
        }
    }
}

impl PartialEq for NamedCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NamedCoordinate {}

impl Hash for NamedCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Static weekly search-flow series behind the dashboard chart.
#[derive(Clone, Debug, Serialize)]
pub struct SearchFlow {
    pub label: &'static str,
    pub labels: [&'static str; 7],
    pub counts: [u32; 7],
}

impl Default for SearchFlow {
    fn default() -> Self {
        SearchFlow {
            label: "Fluxo de Pesquisas",
            labels: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
            counts: [5, 10, 15, 7, 12, 20, 17],
        }
    }
}
