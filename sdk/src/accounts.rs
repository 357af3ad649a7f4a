use anchor_lang::prelude::Pubkey;
use anchor_lang::AccountDeserialize;
use payment_manager::state::PaymentManager;

use crate::error::SdkError;
use crate::ledger::LedgerReader;

/// Reads the payment manager record at `address`.
///
/// Absence is `Ok(None)`, not an error. An account that exists but fails to
/// deserialize is [`SdkError::InvalidAccountData`].
pub async fn get_payment_manager(
    ledger: &dyn LedgerReader,
    address: &Pubkey,
) -> Result<Option<PaymentManager>, SdkError> {
    let Some(data) = ledger.account_data(address).await? else {
        return Ok(None);
    };
    let record = PaymentManager::try_deserialize(&mut data.as_slice()).map_err(|e| {
        SdkError::InvalidAccountData {
            address: *address,
            reason: e.to_string(),
        }
    })?;
    Ok(Some(record))
}
