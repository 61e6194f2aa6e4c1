pub use model::{AreaPolygon, LocationCircle, Route, RouteId};
pub use store::OverlayStore;

mod model;
mod store;
