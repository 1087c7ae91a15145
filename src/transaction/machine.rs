//! The retail transaction state machine.

use super::config::TransactionConfig;
use super::error::TransactionError;
use super::state::{Event, TransactionState};
use super::table::{TransitionContext, TransitionTable};
use super::token::PaymentToken;
use crate::core::{StateHistory, StateTransition};
use chrono::Utc;
use tracing::debug;

const ITEM_STATES: &[TransactionState] = &[TransactionState::RingingUp];

const PAYMENT_INFO_STATES: &[TransactionState] = &[
    TransactionState::CollectingPayment,
    TransactionState::PaymentDeclined,
];

/// A single point-of-sale checkout.
///
/// `I` is the caller's item record and `P` its payment-method descriptor; the
/// transaction never inspects either. State only changes through the event
/// methods, and every refused call leaves the transaction untouched.
///
/// # Example
///
/// ```rust
/// use retail_transaction::{RetailTransaction, TransactionState};
///
/// let mut tx: RetailTransaction<&str, &str> = RetailTransaction::new();
/// tx.add_item("broccoli")?;
/// tx.check_out()?;
/// tx.set_payment_info("card-1234")?;
/// tx.process_payment()?;
/// tx.payment_authorized()?;
///
/// assert_eq!(tx.current_state(), TransactionState::Settled);
/// assert!(tx.is_paid());
/// # Ok::<(), retail_transaction::TransactionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RetailTransaction<I, P> {
    state: TransactionState,
    items: Vec<I>,
    payment_info: Option<P>,
    payment_token: Option<PaymentToken>,
    payment_attempts: usize,
    history: StateHistory<TransactionState>,
    config: TransactionConfig,
}

impl<I, P> Default for RetailTransaction<I, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, P> RetailTransaction<I, P> {
    /// Empty transaction in `RingingUp`, using the default configuration.
    pub fn new() -> Self {
        Self::with_config(TransactionConfig::default())
    }

    /// Empty transaction in `RingingUp` using `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retail_transaction::{PaymentToken, RetailTransaction, TokenIssuer, TransactionConfig};
    ///
    /// struct Register;
    ///
    /// impl TokenIssuer for Register {
    ///     fn issue(&self) -> PaymentToken {
    ///         PaymentToken::new("REG-7")
    ///     }
    /// }
    ///
    /// let config = TransactionConfig::new().with_token_issuer(Register);
    /// let mut tx: RetailTransaction<&str, &str> = RetailTransaction::with_config(config);
    /// tx.add_item("gum")?;
    /// tx.check_out()?;
    /// tx.set_payment_info("cash")?;
    /// tx.process_payment()?;
    /// tx.payment_authorized()?;
    ///
    /// assert_eq!(tx.payment_token().map(PaymentToken::as_str), Some("REG-7"));
    /// # Ok::<(), retail_transaction::TransactionError>(())
    /// ```
    pub fn with_config(config: TransactionConfig) -> Self {
        Self {
            state: TransactionState::RingingUp,
            items: Vec::new(),
            payment_info: None,
            payment_token: None,
            payment_attempts: 0,
            history: StateHistory::new(),
            config,
        }
    }

    /// The lifecycle state tag.
    pub fn current_state(&self) -> TransactionState {
        self.state
    }

    /// Configuration this transaction was created with.
    pub fn config(&self) -> &TransactionConfig {
        &self.config
    }

    // Items

    /// Copy of the items in insertion order.
    pub fn items(&self) -> Vec<I>
    where
        I: Clone,
    {
        self.items.clone()
    }

    /// Number of items, without copying them.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True if no items have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Only allowed while ringing up.
    pub fn add_item(&mut self, item: I) -> Result<(), TransactionError> {
        self.require("add_item", ITEM_STATES)?;
        self.items.push(item);
        Ok(())
    }

    // Payment

    /// The stored payment method, if any.
    pub fn payment_info(&self) -> Option<&P> {
        self.payment_info.as_ref()
    }

    /// Store the payment method, replacing any previous one.
    ///
    /// Only allowed while collecting payment or after a decline.
    pub fn set_payment_info(&mut self, info: P) -> Result<(), TransactionError> {
        self.require("set_payment_info", PAYMENT_INFO_STATES)?;
        self.payment_info = Some(info);
        Ok(())
    }

    /// Remove the stored payment method, returning it.
    ///
    /// Allowed in the same states as [`set_payment_info`](Self::set_payment_info).
    pub fn clear_payment_info(&mut self) -> Result<Option<P>, TransactionError> {
        self.require("clear_payment_info", PAYMENT_INFO_STATES)?;
        Ok(self.payment_info.take())
    }

    /// Confirmation token, present only once the transaction is settled.
    ///
    /// Issued once by [`payment_authorized`](Self::payment_authorized) and
    /// never replaced afterwards.
    pub fn payment_token(&self) -> Option<&PaymentToken> {
        self.payment_token.as_ref()
    }

    /// True once payment has been authorized.
    pub fn is_paid(&self) -> bool {
        self.payment_token.is_some()
    }

    /// Number of times payment processing has started.
    pub fn payment_attempts(&self) -> usize {
        self.payment_attempts
    }

    /// Every successful transition, oldest first.
    pub fn history(&self) -> &StateHistory<TransactionState> {
        &self.history
    }

    // State predicates

    /// True in the initial state, while items may be added.
    pub fn is_ringing_up(&self) -> bool {
        self.state == TransactionState::RingingUp
    }

    /// True after checkout, before payment processing starts.
    pub fn is_collecting_payment(&self) -> bool {
        self.state == TransactionState::CollectingPayment
    }

    /// True while the caller's processor decides the payment.
    pub fn is_processing_payment(&self) -> bool {
        self.state == TransactionState::ProcessingPayment
    }

    /// True after the processor refused payment.
    pub fn is_payment_declined(&self) -> bool {
        self.state == TransactionState::PaymentDeclined
    }

    /// True once payment is authorized. Terminal.
    pub fn is_settled(&self) -> bool {
        self.state == TransactionState::Settled
    }

    // Events

    /// `RingingUp` → `CollectingPayment`.
    ///
    /// # Errors
    ///
    /// [`TransactionError::InvalidTransition`] from any other state, or when
    /// no items have been added.
    pub fn check_out(&mut self) -> Result<(), TransactionError> {
        self.fire(Event::CheckOut)
    }

    /// `CollectingPayment` or `PaymentDeclined` → `RingingUp`.
    ///
    /// Items and payment info are kept.
    ///
    /// # Errors
    ///
    /// [`TransactionError::InvalidTransition`] from any other state.
    pub fn reopen(&mut self) -> Result<(), TransactionError> {
        self.fire(Event::Reopen)
    }

    /// `CollectingPayment` or `PaymentDeclined` → `ProcessingPayment`.
    ///
    /// Increments [`payment_attempts`](Self::payment_attempts).
    ///
    /// # Errors
    ///
    /// [`TransactionError::InvalidTransition`] from any other state, or when
    /// no payment info is stored.
    pub fn process_payment(&mut self) -> Result<(), TransactionError> {
        self.fire(Event::ProcessPayment)
    }

    /// `ProcessingPayment` → `Settled`, attaching a freshly issued payment token.
    ///
    /// # Errors
    ///
    /// [`TransactionError::InvalidTransition`] from any other state.
    pub fn payment_authorized(&mut self) -> Result<(), TransactionError> {
        self.fire(Event::PaymentAuthorized)
    }

    /// `ProcessingPayment` → `PaymentDeclined`.
    ///
    /// # Errors
    ///
    /// [`TransactionError::InvalidTransition`] from any other state.
    pub fn payment_declined(&mut self) -> Result<(), TransactionError> {
        self.fire(Event::PaymentDeclined)
    }

    /// Whether `event` would succeed right now. Never mutates.
    pub fn can(&self, event: Event) -> bool {
        TransitionTable::retail()
            .resolve(event, self.state, &self.context())
            .is_some()
    }

    /// Events that would succeed right now.
    pub fn permitted_events(&self) -> Vec<Event> {
        TransitionTable::retail().permitted(self.state, &self.context())
    }

    /// Fire `event` against the transition table.
    ///
    /// On success the state (and, on settlement, the payment token) is updated
    /// and the transition is appended to the history. On failure nothing changes.
    pub fn fire(&mut self, event: Event) -> Result<(), TransactionError> {
        let from = self.state;
        let Some(to) = TransitionTable::retail().resolve(event, from, &self.context()) else {
            debug!(event = %event, state = %from, "transition rejected");
            return Err(TransactionError::InvalidTransition { event, state: from });
        };

        let attempt = if event == Event::ProcessPayment {
            self.payment_attempts += 1;
            self.payment_attempts
        } else {
            1
        };

        if to == TransactionState::Settled {
            self.payment_token = Some(self.config.token_issuer().issue());
        }

        self.history.push(StateTransition {
            from,
            to,
            event: event.name().to_string(),
            timestamp: Utc::now(),
            attempt,
        });
        self.state = to;

        debug!(event = %event, from = %from, to = %to, attempt, "transaction transitioned");
        Ok(())
    }

    fn context(&self) -> TransitionContext {
        TransitionContext {
            item_count: self.items.len(),
            has_payment_info: self.payment_info.is_some(),
        }
    }

    fn require(
        &self,
        operation: &'static str,
        allowed: &[TransactionState],
    ) -> Result<(), TransactionError> {
        if allowed.contains(&self.state) {
            return Ok(());
        }

        debug!(operation, state = %self.state, "operation rejected");
        Err(TransactionError::InvalidOperation {
            operation,
            state: self.state,
        })
    }
}
