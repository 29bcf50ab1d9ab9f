//! Core state machine vocabulary.
//!
//! This module contains the pure pieces the engine is built from:
//! - State definitions via the `State` trait
//! - Static transition tables via the `Event` trait
//! - Bounded history of state entries
//!
//! Nothing here reads the clock or performs I/O.

mod history;
mod state;

pub use history::{StateHistory, StateTransition, TransitionCause, DEFAULT_HISTORY_LIMIT};
pub use state::{Event, State};
