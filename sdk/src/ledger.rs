use anchor_lang::prelude::Pubkey;
use async_trait::async_trait;

use crate::error::SdkError;

/// Read-only view of ledger state.
///
/// The sdk never opens a network connection itself; callers supply an
/// implementation backed by their RPC client. Implementations should map
/// transport failures to [`SdkError::Transport`] so callers can classify
/// them as retryable.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Raw account data, or `None` if the account does not exist.
    async fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, SdkError>;

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, SdkError> {
        Ok(self.account_data(address).await?.is_some())
    }

    /// Address of the token account holding the largest balance of `mint`,
    /// or `None` if no token account for the mint exists.
    async fn largest_token_account(&self, mint: &Pubkey) -> Result<Option<Pubkey>, SdkError>;
}
