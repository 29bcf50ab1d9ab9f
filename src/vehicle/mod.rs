//! The vehicle lifecycle.
//!
//! - [`VehicleState`] and [`VehicleEvent`]: the states and the static table
//!   of events between them
//! - [`Vehicle`]: the aggregate, with one method per operation
//! - [`Command`]: operations as values, for dispatch via [`Vehicle::execute`]
//! - [`VehicleBuilder`]: restores a vehicle in a given state

mod builder;
mod command;
mod entity;
mod error;
mod lifecycle;

pub use builder::VehicleBuilder;
pub use command::Command;
pub use entity::Vehicle;
pub use error::{BuildError, VehicleError, VehicleTransitionError};
pub use lifecycle::{VehicleEvent, VehicleState};
