//! Payment confirmation tokens and the strategies that mint them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque proof that payment was authorized.
///
/// Only a transaction can attach one to itself, as a side effect of the
/// `payment_authorized` event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentToken(String);

impl PaymentToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strategy for minting payment tokens.
///
/// # Example
///
/// ```rust
/// use retail_transaction::{PaymentToken, TokenIssuer};
///
/// struct Fixed;
///
/// impl TokenIssuer for Fixed {
///     fn issue(&self) -> PaymentToken {
///         PaymentToken::new("AUTH-0001")
///     }
/// }
///
/// assert_eq!(Fixed.issue().as_str(), "AUTH-0001");
/// ```
pub trait TokenIssuer: Send + Sync {
    fn issue(&self) -> PaymentToken;
}

/// Issues random v4 UUID tokens. The default issuer.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidTokenIssuer;

impl TokenIssuer for UuidTokenIssuer {
    fn issue(&self) -> PaymentToken {
        PaymentToken::new(Uuid::new_v4().to_string())
    }
}
