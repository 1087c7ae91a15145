//! Core State trait for lifecycle states.
//!
//! Lifecycle states implement this trait, which provides pure methods for
//! inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into transition history
/// - `PartialEq`: States are compared when resolving transitions
/// - `Debug`: States appear in diagnostics
/// - `Serialize` + `Deserialize`: History records are serializable
///
/// # Example
///
/// ```rust
/// use retail_transaction::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Register {
///     Open,
///     Closed,
/// }
///
/// impl State for Register {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(Register::Closed.is_final());
/// assert!(!Register::Open.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Terminal states have no outgoing transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this state represents a failure condition.
    ///
    /// Error states are not necessarily terminal; a machine may recover from them.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
