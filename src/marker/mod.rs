pub use model::{Marker, MarkerAction, MarkerId};
pub use store::MarkerStore;

mod model;
mod store;
