//! State transition history tracking.
//!
//! Provides an ordered, append-only record of the transitions a machine has
//! taken over time.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use retail_transaction::core::StateTransition;
/// use retail_transaction::TransactionState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TransactionState::RingingUp,
///     to: TransactionState::CollectingPayment,
///     event: "check_out".to_string(),
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert_eq!(transition.event, "check_out");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event that caused the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based attempt number for events that may be retried
    pub attempt: usize,
}

/// Ordered history of state transitions.
///
/// Appending is in place (`push`) or by value (`record`); neither copies the
/// transitions already recorded.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Append a transition, consuming and returning the history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source state of the first transition followed by the
    /// target state of every transition. Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names of the events recorded, in order.
    pub fn events(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.event.as_str()).collect()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// All transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
