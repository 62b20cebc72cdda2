//! Location resolution: the geocoding collaborator trait and the built-in
//! offline gazetteer.

pub mod gazetteer;
pub mod resolver;

pub use gazetteer::Gazetteer;
pub use resolver::{GeocodeError, LocationResolver};
