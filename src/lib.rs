pub use error::Error;

pub mod conf;
pub mod coords;
pub mod dashboard;
mod error;
pub mod io;
pub mod locate;
pub mod marker;
pub mod overlay;
pub mod route;
pub mod search;
#[cfg(test)]
mod test;
pub mod view;

pub type Result<T, E = Error> = std::result::Result<T, E>;
