//! Retail checkout lifecycle.
//!
//! [`RetailTransaction`] holds the items, payment details, and lifecycle state
//! of one checkout. Every state change goes through the [`TransitionTable`];
//! direct mutations (items, payment info) are gated on the current state.
//!
//! ```text
//!             check_out [items]
//!  RingingUp ─────────────────▶ CollectingPayment
//!      ▲                              │
//!      │ reopen                       │ process_payment [payment info]
//!      │                              ▼
//!  PaymentDeclined ◀──────────  ProcessingPayment ──────────▶ Settled
//!      │      payment_declined        ▲       payment_authorized
//!      └──────────────────────────────┘
//!             process_payment [payment info]
//! ```
//!
//! `reopen` is also available from `CollectingPayment`.

mod config;
mod error;
mod machine;
mod state;
mod table;
mod token;

pub use config::TransactionConfig;
pub use error::TransactionError;
pub use machine::RetailTransaction;
pub use state::{Event, TransactionState};
pub use table::{TransitionContext, TransitionRule, TransitionTable};
pub use token::{PaymentToken, TokenIssuer, UuidTokenIssuer};
