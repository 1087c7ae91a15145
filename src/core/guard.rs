//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over a context value. A transition whose
//! guard returns `false` is unavailable, exactly as if its source state did not
//! match.

use std::fmt;

/// Pure predicate that determines if a transition can execute.
///
/// The predicate receives a read-only context describing whatever the guard
/// needs to inspect (for a transaction, its item count and payment details).
///
/// # Example
///
/// ```rust
/// use retail_transaction::core::Guard;
///
/// struct Basket {
///     items: usize,
/// }
///
/// let not_empty = Guard::new(|b: &Basket| b.items > 0);
///
/// assert!(not_empty.check(&Basket { items: 2 }));
/// assert!(!not_empty.check(&Basket { items: 0 }));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
