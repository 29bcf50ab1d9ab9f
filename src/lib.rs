//! Fleet FSM: role-gated lifecycle state machine for shared vehicles
//!
//! Each vehicle in a micromobility fleet moves through a fixed lifecycle
//! (`ready`, `riding`, `bounty`, `collected`, `dropped`, ...). Transitions are
//! gated by the caller's role: riders and hunters go through the transition
//! table, admins may force states directly, and some operations are denied
//! outright.
//!
//! The crate is a pure core: it performs no I/O and no locking. Storage,
//! transport and authentication belong to the integrator.
//!
//! # Core Concepts
//!
//! - **Engine**: [`machine::StateMachine`], a generic evaluator over a static
//!   event table with entry hooks and a bounded history
//! - **Policy**: [`policy::authorize`], the (operation, role) access matrix
//! - **Vehicle**: [`vehicle::Vehicle`], the aggregate exposing each operation
//! - **Sweeps**: [`fleet`], batch transitions over many vehicles
//!
//! # Example
//!
//! ```rust
//! use fleet_fsm::policy::Role;
//! use fleet_fsm::vehicle::{Vehicle, VehicleError, VehicleState};
//!
//! let mut vehicle = Vehicle::new();
//! vehicle.start_ride(Role::EndUser).unwrap();
//! vehicle.finish_ride(50, Role::EndUser).unwrap();
//! assert_eq!(vehicle.current_state(), VehicleState::Ready);
//!
//! // Riders cannot collect vehicles.
//! let err = vehicle.collect(Role::EndUser).unwrap_err();
//! assert!(matches!(err, VehicleError::PermissionDenied { .. }));
//! ```

pub mod config;
pub mod core;
pub mod fleet;
pub mod machine;
mod macros;
pub mod policy;
pub mod vehicle;

// Re-export commonly used types
pub use crate::config::FleetPolicy;
pub use crate::core::{Event, State, StateHistory, StateTransition};
pub use crate::machine::{StateMachine, TransitionError};
pub use crate::policy::{authorize, Access, Operation, Role};
pub use crate::vehicle::{Command, Vehicle, VehicleBuilder, VehicleError, VehicleEvent, VehicleState};
