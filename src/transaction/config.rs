//! Per-transaction configuration.

use super::token::{TokenIssuer, UuidTokenIssuer};
use std::fmt;
use std::sync::Arc;

/// Strategy values embedded in a transaction.
///
/// Cloning shares the underlying issuer.
#[derive(Clone)]
pub struct TransactionConfig {
    token_issuer: Arc<dyn TokenIssuer>,
}

impl TransactionConfig {
    /// Configuration with the default [`UuidTokenIssuer`].
    pub fn new() -> Self {
        Self {
            token_issuer: Arc::new(UuidTokenIssuer),
        }
    }

    /// Replace the issuer used when payment is authorized.
    pub fn with_token_issuer<T>(mut self, issuer: T) -> Self
    where
        T: TokenIssuer + 'static,
    {
        self.token_issuer = Arc::new(issuer);
        self
    }

    pub fn token_issuer(&self) -> &dyn TokenIssuer {
        self.token_issuer.as_ref()
    }
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransactionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionConfig")
            .field("token_issuer", &"dyn TokenIssuer")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::token::PaymentToken;

    struct Constant;

    impl TokenIssuer for Constant {
        fn issue(&self) -> PaymentToken {
            PaymentToken::new("constant")
        }
    }

    #[test]
    fn custom_issuer_replaces_default() {
        let config = TransactionConfig::new().with_token_issuer(Constant);
        assert_eq!(config.token_issuer().issue().as_str(), "constant");
    }

    #[test]
    fn clones_share_the_issuer() {
        let config = TransactionConfig::default().with_token_issuer(Constant);
        let cloned = config.clone();
        assert_eq!(cloned.token_issuer().issue(), config.token_issuer().issue());
    }
}
