//! Data-driven transition table.
//!
//! Each rule maps an event and a set of source states to a target state,
//! optionally behind a [`Guard`] evaluated against a [`TransitionContext`].
//! When several rules share an event, the first one that applies wins.

use super::state::{Event, TransactionState};
use crate::core::Guard;
use std::sync::OnceLock;

/// Read-only view of the transaction fields guards may inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TransitionContext {
    pub item_count: usize,
    pub has_payment_info: bool,
}

/// One row of the table.
#[derive(Debug)]
pub struct TransitionRule {
    pub event: Event,
    pub from: Vec<TransactionState>,
    pub to: TransactionState,
    pub guard: Option<Guard<TransitionContext>>,
}

impl TransitionRule {
    pub fn new(event: Event, from: &[TransactionState], to: TransactionState) -> Self {
        Self {
            event,
            from: from.to_vec(),
            to,
            guard: None,
        }
    }

    /// Attach a guard predicate.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&TransitionContext) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// True if `current` is a source state and the guard (if any) passes.
    pub fn can_execute(&self, current: TransactionState, context: &TransitionContext) -> bool {
        if !self.from.contains(&current) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(context))
    }
}

#[derive(Debug, Default)]
pub struct TransitionTable {
    rules: Vec<TransitionRule>,
}

impl TransitionTable {
    /// Empty table.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule.
    pub fn rule(mut self, rule: TransitionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The checkout lifecycle table, built once and shared.
    pub fn retail() -> &'static TransitionTable {
        static RETAIL: OnceLock<TransitionTable> = OnceLock::new();
        RETAIL.get_or_init(build_retail)
    }

    /// Target state for `event` fired from `from`, or `None` if unavailable.
    pub fn resolve(
        &self,
        event: Event,
        from: TransactionState,
        context: &TransitionContext,
    ) -> Option<TransactionState> {
        self.rules
            .iter()
            .find(|r| r.event == event && r.can_execute(from, context))
            .map(|r| r.to)
    }

    /// Events that would currently succeed, in declaration order, without duplicates.
    pub fn permitted(&self, from: TransactionState, context: &TransitionContext) -> Vec<Event> {
        let mut events = Vec::new();
        for rule in &self.rules {
            if rule.can_execute(from, context) && !events.contains(&rule.event) {
                events.push(rule.event);
            }
        }
        events
    }

    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }
}

fn build_retail() -> TransitionTable {
    use TransactionState::*;

    TransitionTable::new()
        .rule(
            TransitionRule::new(Event::CheckOut, &[RingingUp], CollectingPayment)
                .when(|ctx| ctx.item_count > 0),
        )
        .rule(TransitionRule::new(
            Event::Reopen,
            &[CollectingPayment, PaymentDeclined],
            RingingUp,
        ))
        .rule(
            TransitionRule::new(
                Event::ProcessPayment,
                &[CollectingPayment, PaymentDeclined],
                ProcessingPayment,
            )
            .when(|ctx| ctx.has_payment_info),
        )
        .rule(TransitionRule::new(
            Event::PaymentAuthorized,
            &[ProcessingPayment],
            Settled,
        ))
        .rule(TransitionRule::new(
            Event::PaymentDeclined,
            &[ProcessingPayment],
            PaymentDeclined,
        ))
}
