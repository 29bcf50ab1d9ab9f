//! State transition history tracking.
//!
//! Every state entry is recorded, including forced changes and automatic
//! redirects, in a history bounded to a fixed number of records.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions retained by a [`StateHistory`].
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// What caused a state to be entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransitionCause {
    /// A validated event fired.
    Fired { event: String },
    /// The state was set directly, without validity checks.
    Forced,
    /// The previous state redirected on entry.
    Redirected,
}

/// Record of a single state entry.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::core::{StateTransition, TransitionCause};
/// use fleet_fsm::vehicle::VehicleState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: VehicleState::Ready,
///     to: VehicleState::Riding,
///     timestamp: Utc::now(),
///     cause: TransitionCause::Fired { event: "startRide".to_string() },
/// };
/// assert!(!transition.is_redirect());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Why the transition happened
    pub cause: TransitionCause,
}

impl<S: State> StateTransition<S> {
    pub fn is_forced(&self) -> bool {
        self.cause == TransitionCause::Forced
    }

    pub fn is_redirect(&self) -> bool {
        self.cause == TransitionCause::Redirected
    }
}

/// Ordered, bounded history of state transitions.
///
/// `record` returns a new history with the transition appended; `push`
/// appends in place. Once the limit is reached the oldest record is dropped.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::core::{StateHistory, StateTransition, TransitionCause};
/// use fleet_fsm::vehicle::VehicleState;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: VehicleState::Ready,
///     to: VehicleState::Riding,
///     timestamp: Utc::now(),
///     cause: TransitionCause::Forced,
/// });
///
/// assert_eq!(history.get_path(), vec![&VehicleState::Ready, &VehicleState::Riding]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` records.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, dropping the oldest record when full.
    pub fn push(&mut self, transition: StateTransition<S>) {
        while self.transitions.len() >= self.limit.max(1) {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Duration between the oldest and newest retained transitions.
    ///
    /// Returns `None` when empty or when timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Iterate retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> + '_ {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
