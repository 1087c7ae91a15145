//! Retail transaction: a guarded state machine for a point-of-sale checkout.
//!
//! A transaction moves through five states. Items may only be added while
//! ringing up, payment details only while collecting or after a decline, and
//! payment may be retried after a decline until it is authorized.
//!
//! # Core Concepts
//!
//! - **State**: Lifecycle states implement the `State` trait
//! - **Guards**: Pure predicates that make a transition unavailable
//! - **Transition table**: Data-driven mapping of (event, state) to target state
//! - **History**: Ordered record of every transition taken
//!
//! # Example
//!
//! ```rust
//! use retail_transaction::{RetailTransaction, TransactionError, TransactionState};
//!
//! let mut tx: RetailTransaction<&str, &str> = RetailTransaction::new();
//!
//! // Cannot check out an empty basket.
//! assert!(matches!(
//!     tx.check_out(),
//!     Err(TransactionError::InvalidTransition { .. })
//! ));
//!
//! tx.add_item("bobcat")?;
//! tx.check_out()?;
//! tx.set_payment_info("card-1234")?;
//! tx.process_payment()?;
//! tx.payment_declined()?;
//!
//! tx.reopen()?;
//! tx.add_item("gum")?;
//! tx.check_out()?;
//! tx.set_payment_info("card-5678")?;
//! tx.process_payment()?;
//! tx.payment_authorized()?;
//!
//! assert_eq!(tx.current_state(), TransactionState::Settled);
//! assert_eq!(tx.items(), vec!["bobcat", "gum"]);
//! assert!(tx.is_paid());
//! # Ok::<(), TransactionError>(())
//! ```

pub mod core;
pub mod transaction;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use transaction::{
    Event, PaymentToken, RetailTransaction, TokenIssuer, TransactionConfig, TransactionError,
    TransactionState, TransitionContext, TransitionRule, TransitionTable, UuidTokenIssuer,
};
