//! Errors returned by transaction operations.

use super::state::{Event, TransactionState};
use thiserror::Error;

/// Why a transaction refused a call.
///
/// Both variants are recoverable: the transaction is left exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// A direct mutation (adding items, changing payment info) is not allowed
    /// in the current state.
    #[error("Cannot {operation} while transaction state is '{state}'")]
    InvalidOperation {
        operation: &'static str,
        state: TransactionState,
    },

    /// The event has no transition from the current state, or its guard failed.
    #[error("Event '{event}' cannot fire from state '{state}'")]
    InvalidTransition {
        event: Event,
        state: TransactionState,
    },
}

impl TransactionError {
    /// State the transaction was in when the call was refused.
    pub fn state(&self) -> TransactionState {
        match self {
            Self::InvalidOperation { state, .. } | Self::InvalidTransition { state, .. } => *state,
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operation_names_operation_and_state() {
        let err = TransactionError::InvalidOperation {
            operation: "add_item",
            state: TransactionState::Settled,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add_item while transaction state is 'settled'"
        );
        assert!(err.is_invalid_operation());
        assert_eq!(err.state(), TransactionState::Settled);
    }

    #[test]
    fn invalid_transition_names_event_and_state() {
        let err = TransactionError::InvalidTransition {
            event: Event::CheckOut,
            state: TransactionState::RingingUp,
        };
        assert_eq!(
            err.to_string(),
            "Event 'check_out' cannot fire from state 'ringing_up'"
        );
        assert!(err.is_invalid_transition());
        assert!(!err.is_invalid_operation());
    }
}
