//! The transition engine.
//!
//! [`StateMachine`] evaluates a static [`Event`](crate::core::Event) table
//! against one current state:
//!
//! - `can_fire` checks the table
//! - `fire` performs a validated transition
//! - `force_state` sets the state unconditionally (privileged callers only)
//!
//! Both mutating paths run the same entry hooks.

mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use error::TransitionError;
pub use machine::StateMachine;
