//! Table-driven state machine engine.

use crate::core::{Event, State, StateHistory, StateTransition, TransitionCause};
use crate::machine::error::TransitionError;
use chrono::{DateTime, Utc};
use tracing::trace;

/// State machine over a static event table.
///
/// Holds the current state, the time it was entered and a bounded history.
/// Time is always passed in by the caller; the engine never reads the clock.
///
/// Entering a state runs two fixed hooks: the entry timestamp is refreshed
/// and a transition is recorded, then, if the state declares a
/// [`redirect`](State::redirect), the redirect target is forced.
#[derive(Clone, Debug)]
pub struct StateMachine<E: Event> {
    current: E::State,
    entered_at: DateTime<Utc>,
    history: StateHistory<E::State>,
}

impl<E: Event> StateMachine<E> {
    /// Create a machine resting in `initial` since `at`.
    pub fn new(initial: E::State, at: DateTime<Utc>) -> Self {
        Self::with_history(initial, at, StateHistory::new())
    }

    /// Create a machine with a caller-supplied (usually bounded) history.
    pub fn with_history(
        initial: E::State,
        at: DateTime<Utc>,
        history: StateHistory<E::State>,
    ) -> Self {
        Self {
            current: initial,
            entered_at: at,
            history,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> E::State {
        self.current
    }

    /// Time the current state was entered (pure)
    pub fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<E::State> {
        &self.history
    }

    /// Check whether `event` may fire from the current state (pure)
    pub fn can_fire(&self, event: E) -> bool {
        event.allows(&self.current)
    }

    /// Fire `event`, entering its destination.
    ///
    /// Fails without mutating anything when the current state is not one of
    /// the event's sources.
    pub fn fire(&mut self, event: E, at: DateTime<Utc>) -> Result<(), TransitionError<E::State>> {
        if !self.can_fire(event) {
            return Err(TransitionError::InvalidTransition {
                event: event.name(),
                current: self.current,
            });
        }

        self.enter(
            event.destination(),
            TransitionCause::Fired {
                event: event.name().to_string(),
            },
            at,
        );
        Ok(())
    }

    /// Set the current state without consulting the table.
    ///
    /// Entry hooks still run, so a forced redirecting state still redirects.
    pub fn force_state(&mut self, state: E::State, at: DateTime<Utc>) {
        self.enter(state, TransitionCause::Forced, at);
    }

    fn enter(&mut self, state: E::State, cause: TransitionCause, at: DateTime<Utc>) {
        let from = self.current;
        trace!(from = %from, to = %state, ?cause, "entering state");

        self.current = state;
        self.entered_at = at;
        self.history.push(StateTransition {
            from,
            to: state,
            timestamp: at,
            cause,
        });

        if let Some(next) = state.redirect() {
            self.enter(next, TransitionCause::Redirected, at);
        }
    }
}
