use anchor_lang::prelude::Pubkey;
use thiserror::Error;

/// Source type for transient transport failures surfaced by a
/// [`crate::LedgerReader`] implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SdkError {
    /// A required account does not exist on the ledger.
    #[error("account {0} not found")]
    AccountNotFound(Pubkey),

    /// An account exists but its data does not parse as the expected type.
    #[error("account {address} holds invalid data: {reason}")]
    InvalidAccountData { address: Pubkey, reason: String },

    /// No token account holds the receipt mint.
    #[error("no token account found for receipt mint {mint}")]
    NoReceiptTokenAccount { mint: Pubkey },

    /// A payment manager record was required but is absent. Typed absence so
    /// callers can distinguish "missing" from "zero value".
    #[error("no payment manager named {name:?} at {address}")]
    PaymentManagerNotFound { name: String, address: Pubkey },

    /// Transient I/O failure from the ledger reader. The caller owns the
    /// retry policy.
    #[error("ledger transport error: {0}")]
    Transport(#[source] TransportError),
}

impl SdkError {
    /// Whether retrying the failed operation can succeed without any change
    /// to its inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SdkError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_errors_are_retryable() {
        let transport = SdkError::Transport("connection reset".into());
        assert!(transport.is_retryable());

        let not_found = SdkError::AccountNotFound(Pubkey::new_unique());
        assert!(!not_found.is_retryable());

        let missing = SdkError::PaymentManagerNotFound {
            name: "marketplace".to_string(),
            address: Pubkey::new_unique(),
        };
        assert!(!missing.is_retryable());
        assert!(missing.to_string().contains("marketplace"));
    }
}
