use super::{CoordinateId, NamedCoordinate, SearchFlow};
use crate::{Error, Result};
use tracing::info;

/// Mutable list of named coordinates behind the dashboard table, with
/// the modal edit/delete staging flow. Independent of the map view's
/// marker state.
#[derive(Debug, Default)]
pub struct Dashboard {
    coordinates: Vec<NamedCoordinate>,
    staged_edit: Option<CoordinateId>,
    staged_delete: Option<CoordinateId>,
    search_flow: SearchFlow,
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard::default()
    }

    /// The stock demo entries the dashboard starts with.
    pub fn seeded() -> Self {
        Dashboard {
            coordinates: vec![
                NamedCoordinate::new("Los Angeles", 34.0522, -118.2437),
                NamedCoordinate::new("New York", 40.7128, -74.0060),
                NamedCoordinate::new("San Francisco", 37.7749, -122.4194),
                NamedCoordinate::new("San Francisco 2", 37.7749, -122.4194),
            ],
            ..Dashboard::default()
        }
    }

    /// Source for a full table rebuild.
    pub fn rows(&self) -> &[NamedCoordinate] {
        &self.coordinates
    }

    pub fn total_locations(&self) -> usize {
        self.coordinates.len()
    }

    pub fn search_flow(&self) -> &SearchFlow {
        &self.search_flow
    }

    pub fn get(&self, id: CoordinateId) -> Option<&NamedCoordinate> {
        self.coordinates.iter().find(|it| it.id == id)
    }

    pub fn add(&mut self, name: impl Into<String>, lat: f64, lon: f64) -> CoordinateId {
        let coordinate = NamedCoordinate::new(name, lat, lon);
        let id = coordinate.id;
        self.coordinates.push(coordinate);
        id
    }

    /// Loads an entry into the edit form, remembering which one.
    pub fn stage_edit(&mut self, id: CoordinateId) -> Option<&NamedCoordinate> {
        let entry = self.coordinates.iter().find(|it| it.id == id)?;
        self.staged_edit = Some(id);
        Some(entry)
    }

    /// Overwrites the staged entry with the form values.
    pub fn save_edit(&mut self, name: impl Into<String>, lat: f64, lon: f64) -> Result<()> {
        let id = self
            .staged_edit
            .take()
            .ok_or_else(|| Error::InvalidInput("No edit in progress".into()))?;
        let entry = self
            .coordinates
            .iter_mut()
            .find(|it| it.id == id)
            .ok_or_else(|| Error::NotFound("Coordinate no longer exists".into()))?;
        entry.name = name.into();
        entry.lat = lat;
        entry.lon = lon;
        info!(lat, lon, "Updated coordinate");
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.staged_edit = None;
    }

    pub fn stage_delete(&mut self, id: CoordinateId) -> Option<&NamedCoordinate> {
        let entry = self.coordinates.iter().find(|it| it.id == id)?;
        self.staged_delete = Some(id);
        Some(entry)
    }

    /// Removes exactly the staged entry, even when other entries carry
    /// identical (name, lat, lon) values.
    pub fn confirm_delete(&mut self) -> Result<NamedCoordinate> {
        let id = self
            .staged_delete
            .take()
            .ok_or_else(|| Error::InvalidInput("No delete in progress".into()))?;
        let index = self
            .coordinates
            .iter()
            .position(|it| it.id == id)
            .ok_or_else(|| Error::NotFound("Coordinate no longer exists".into()))?;
        let removed = self.coordinates.remove(index);
        info!(name = %removed.name, "Deleted coordinate");
        Ok(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.staged_delete = None;
    }
}
