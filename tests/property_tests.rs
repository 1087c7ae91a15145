//! Property-based tests for the transaction lifecycle.
//!
//! Random sequences of calls are driven against a transaction and the
//! lifecycle invariants are checked after every step.

use proptest::prelude::*;
use retail_transaction::{Event, RetailTransaction, State, TransactionState, TransitionTable};

#[derive(Clone, Debug)]
enum Call {
    AddItem(u8),
    SetPaymentInfo(u8),
    ClearPaymentInfo,
    Fire(Event),
}

prop_compose! {
    fn arbitrary_event()(variant in 0..5usize) -> Event {
        Event::ALL[variant]
    }
}

fn arbitrary_call() -> impl Strategy<Value = Call> {
    prop_oneof![
        any::<u8>().prop_map(Call::AddItem),
        any::<u8>().prop_map(Call::SetPaymentInfo),
        Just(Call::ClearPaymentInfo),
        arbitrary_event().prop_map(Call::Fire),
    ]
}

type Tx = RetailTransaction<u8, u8>;

fn apply(tx: &mut Tx, call: &Call) -> bool {
    match call {
        Call::AddItem(item) => tx.add_item(*item).is_ok(),
        Call::SetPaymentInfo(info) => tx.set_payment_info(*info).is_ok(),
        Call::ClearPaymentInfo => tx.clear_payment_info().is_ok(),
        Call::Fire(event) => tx.fire(*event).is_ok(),
    }
}

proptest! {
    #[test]
    fn token_present_iff_settled(calls in prop::collection::vec(arbitrary_call(), 0..60)) {
        let mut tx = Tx::new();
        for call in &calls {
            apply(&mut tx, call);
            prop_assert_eq!(tx.payment_token().is_some(), tx.is_settled());
            prop_assert_eq!(tx.is_paid(), tx.current_state() == TransactionState::Settled);
        }
    }

    #[test]
    fn refused_calls_change_nothing(calls in prop::collection::vec(arbitrary_call(), 0..60)) {
        let mut tx = Tx::new();
        for call in &calls {
            let state = tx.current_state();
            let items = tx.items();
            let info = tx.payment_info().copied();
            let history_len = tx.history().len();
            let token = tx.payment_token().cloned();
            let attempts = tx.payment_attempts();

            if !apply(&mut tx, call) {
                prop_assert_eq!(tx.current_state(), state);
                prop_assert_eq!(tx.items(), items);
                prop_assert_eq!(tx.payment_info().copied(), info);
                prop_assert_eq!(tx.history().len(), history_len);
                prop_assert_eq!(tx.payment_token().cloned(), token);
                prop_assert_eq!(tx.payment_attempts(), attempts);
            }
        }
    }

    #[test]
    fn token_never_changes_once_issued(calls in prop::collection::vec(arbitrary_call(), 0..60)) {
        let mut tx = Tx::new();
        let mut issued = None;
        for call in &calls {
            apply(&mut tx, call);
            if let Some(first) = &issued {
                prop_assert_eq!(Some(first), tx.payment_token());
            } else {
                issued = tx.payment_token().cloned();
            }
        }
    }

    #[test]
    fn items_only_grow_while_ringing_up(calls in prop::collection::vec(arbitrary_call(), 0..60)) {
        let mut tx = Tx::new();
        for call in &calls {
            let was_ringing_up = tx.is_ringing_up();
            let before = tx.item_count();
            apply(&mut tx, call);
            if !was_ringing_up {
                prop_assert_eq!(tx.item_count(), before);
            }
        }
    }

    #[test]
    fn checkout_never_leaves_with_empty_basket(calls in prop::collection::vec(arbitrary_call(), 0..60)) {
        let mut tx = Tx::new();
        for call in &calls {
            apply(&mut tx, call);
            if !tx.is_ringing_up() {
                prop_assert!(!tx.is_empty());
            }
        }
    }

    #[test]
    fn can_agrees_with_fire(calls in prop::collection::vec(arbitrary_call(), 0..40), event in arbitrary_event()) {
        let mut tx = Tx::new();
        for call in &calls {
            apply(&mut tx, call);
        }

        let predicted = tx.can(event);
        prop_assert_eq!(predicted, tx.permitted_events().contains(&event));
        prop_assert_eq!(tx.fire(event).is_ok(), predicted);
    }

    #[test]
    fn history_path_is_connected(calls in prop::collection::vec(arbitrary_call(), 0..60)) {
        let mut tx = Tx::new();
        for call in &calls {
            apply(&mut tx, call);
        }

        let transitions = tx.history().transitions();
        if let Some(first) = transitions.first() {
            prop_assert_eq!(first.from, TransactionState::RingingUp);
        }
        for pair in transitions.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if let Some(last) = transitions.last() {
            prop_assert_eq!(last.to, tx.current_state());
        }
    }

    #[test]
    fn final_states_permit_nothing(variant in 0..5usize, items in 0..3usize, has_info in any::<bool>()) {
        let state = TransactionState::ALL[variant];
        let context = retail_transaction::TransitionContext { item_count: items, has_payment_info: has_info };
        let permitted = TransitionTable::retail().permitted(state, &context);
        if state.is_final() {
            prop_assert!(permitted.is_empty());
        }
    }
}
