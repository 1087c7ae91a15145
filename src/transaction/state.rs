//! Lifecycle states and events of a retail transaction.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a transaction is in its checkout lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    /// Items are being scanned. Initial state.
    RingingUp,
    /// Items are frozen; waiting for a payment method.
    CollectingPayment,
    /// Payment has been handed to the caller's processor.
    ProcessingPayment,
    /// The processor refused payment. The customer may retry or reopen.
    PaymentDeclined,
    /// Payment authorized. Terminal.
    Settled,
}

impl TransactionState {
    pub const ALL: [TransactionState; 5] = [
        Self::RingingUp,
        Self::CollectingPayment,
        Self::ProcessingPayment,
        Self::PaymentDeclined,
        Self::Settled,
    ];
}

impl State for TransactionState {
    fn name(&self) -> &str {
        match self {
            Self::RingingUp => "ringing_up",
            Self::CollectingPayment => "collecting_payment",
            Self::ProcessingPayment => "processing_payment",
            Self::PaymentDeclined => "payment_declined",
            Self::Settled => "settled",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Settled)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::PaymentDeclined)
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Events that drive a transaction between states.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    CheckOut,
    Reopen,
    ProcessPayment,
    PaymentAuthorized,
    PaymentDeclined,
}

impl Event {
    pub const ALL: [Event; 5] = [
        Self::CheckOut,
        Self::Reopen,
        Self::ProcessPayment,
        Self::PaymentAuthorized,
        Self::PaymentDeclined,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckOut => "check_out",
            Self::Reopen => "reopen",
            Self::ProcessPayment => "process_payment",
            Self::PaymentAuthorized => "payment_authorized",
            Self::PaymentDeclined => "payment_declined",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_settled_is_final() {
        let finals: Vec<_> = TransactionState::ALL
            .iter()
            .filter(|s| s.is_final())
            .collect();
        assert_eq!(finals, vec![&TransactionState::Settled]);
    }

    #[test]
    fn declined_is_a_recoverable_error_state() {
        assert!(TransactionState::PaymentDeclined.is_error());
        assert!(!TransactionState::PaymentDeclined.is_final());
        assert!(!TransactionState::Settled.is_error());
    }

    #[test]
    fn display_matches_serialized_name() {
        for state in TransactionState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
        for event in Event::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{event}\""));
        }
    }

    #[test]
    fn state_round_trips_through_json() {
        let json = serde_json::to_string(&TransactionState::CollectingPayment).unwrap();
        assert_eq!(json, "\"collecting_payment\"");
        let back: TransactionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TransactionState::CollectingPayment);
    }
}
