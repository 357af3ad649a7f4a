use anchor_lang::prelude::*;
use mpl_token_metadata::accounts::Metadata;

use crate::{errors::ErrorCode, fees::CreatorShare};

/// Royalty configuration read from a mint's metadata account
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RoyaltyMetadata {
    pub seller_fee_basis_points: u16,
    /// Creators with nonzero share, in metadata order. Trailing accounts of
    /// the royalty instructions are indexed positionally against this list.
    pub creators: Vec<CreatorShare>,
}

/// Reads and validates the mint's creator-royalty metadata.
///
/// An empty metadata account is a valid royalty-free mint and yields the
/// default (zero seller fee, no creators). A non-empty account must be the
/// canonical metadata PDA, owned by the metadata program, parse, and
/// reference the mint.
pub fn read_royalty_metadata(mint: &Pubkey, mint_metadata: &AccountInfo) -> Result<RoyaltyMetadata> {
    let (expected_metadata, _) = Metadata::find_pda(mint);
    require!(
        mint_metadata.key() == expected_metadata,
        ErrorCode::InvalidMintMetadata
    );

    if mint_metadata.data_is_empty() {
        return Ok(RoyaltyMetadata::default());
    }

    require!(
        mint_metadata.owner == &mpl_token_metadata::ID,
        ErrorCode::InvalidMintMetadataOwner
    );

    let data = mint_metadata.try_borrow_data()?;
    let metadata =
        Metadata::safe_deserialize(&data).map_err(|_| error!(ErrorCode::InvalidMintMetadata))?;
    require!(metadata.mint == *mint, ErrorCode::InvalidMintMetadata);

    let creators = metadata
        .creators
        .unwrap_or_default()
        .into_iter()
        .filter(|creator| creator.share != 0)
        .map(|creator| CreatorShare {
            address: creator.address,
            share: creator.share,
        })
        .collect();

    Ok(RoyaltyMetadata {
        seller_fee_basis_points: metadata.seller_fee_basis_points,
        creators,
    })
}
