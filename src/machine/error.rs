//! Engine error types.

use crate::core::State;
use thiserror::Error;

/// Errors returned by [`StateMachine::fire`](super::StateMachine::fire).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<S: State> {
    /// The event's source set does not contain the current state.
    #[error("event '{event}' cannot fire from state '{current}'")]
    InvalidTransition { event: &'static str, current: S },
}

impl<S: State> TransitionError<S> {
    /// State the machine was in when the event was rejected.
    pub fn current(&self) -> S {
        match self {
            Self::InvalidTransition { current, .. } => *current,
        }
    }
}
