pub use model::{CoordinateId, NamedCoordinate, SearchFlow};
pub use store::Dashboard;

mod model;
mod store;
