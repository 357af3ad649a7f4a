use anchor_lang::prelude::Pubkey;
use mpl_token_metadata::accounts::Metadata;
use tracing::{debug, warn};

use crate::error::SdkError;
use crate::ledger::LedgerReader;

/// One entry of a mint's royalty table, in metadata order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorRoyalty {
    pub address: Pubkey,
    pub share: u8,
    pub verified: bool,
}

/// Royalty configuration read from a mint's metadata account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorMetadata {
    pub seller_fee_basis_points: u16,
    pub creators: Vec<CreatorRoyalty>,
}

/// Reads the creator-royalty metadata for `mint`.
///
/// Absent or unparsable metadata yields `Ok(None)`: a royalty-free payment
/// is a valid degraded mode, not a failure. The two cases log at different
/// levels so a corrupt metadata account is distinguishable from a mint that
/// never had metadata. Transport failures still propagate.
pub async fn read_creator_metadata(
    ledger: &dyn LedgerReader,
    mint: &Pubkey,
) -> Result<Option<CreatorMetadata>, SdkError> {
    let (metadata_address, _) = Metadata::find_pda(mint);
    let Some(data) = ledger.account_data(&metadata_address).await? else {
        debug!(%mint, "no metadata account, treating as royalty-free");
        return Ok(None);
    };
    let metadata = match Metadata::safe_deserialize(&data) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(%mint, error = %e, "unparsable metadata account, proceeding without royalties");
            return Ok(None);
        }
    };

    let creators = metadata
        .creators
        .unwrap_or_default()
        .into_iter()
        .map(|creator| CreatorRoyalty {
            address: creator.address,
            share: creator.share,
            verified: creator.verified,
        })
        .collect();

    Ok(Some(CreatorMetadata {
        seller_fee_basis_points: metadata.seller_fee_basis_points,
        creators,
    }))
}
