use anchor_lang::prelude::*;

use crate::{
    constants::PAYMENT_MANAGER_SEED,
    errors::ErrorCode,
    events::PaymentManagerUpdated,
    fees::assert_valid_basis_points,
    state::PaymentManager,
};

/// Selective update: every field is optional and unset fields retain their
/// prior values. This is a merge with existing state, not an overwrite.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct UpdateIx {
    pub authority: Option<Pubkey>,
    pub fee_collector: Option<Pubkey>,
    pub maker_fee_basis_points: Option<u16>,
    pub taker_fee_basis_points: Option<u16>,
    pub include_seller_fee_basis_points: Option<bool>,
    /// One-way latch: once the record holds a share, updates can change the
    /// value but not clear it back to unset. Unset and 0 settle identically.
    pub royalty_fee_share: Option<u64>,
}

#[derive(Accounts)]
pub struct Update<'info> {
    #[account(
        mut,
        seeds = [PAYMENT_MANAGER_SEED.as_bytes(), payment_manager.name.as_bytes()],
        bump = payment_manager.bump,
        constraint = payment_manager.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub payment_manager: Account<'info, PaymentManager>,

    pub authority: Signer<'info>,
}

/// Updates a payment manager, authority only
pub fn handler(ctx: Context<Update>, ix: UpdateIx) -> Result<()> {
    if let Some(maker_fee_basis_points) = ix.maker_fee_basis_points {
        assert_valid_basis_points(maker_fee_basis_points.into())?;
    }
    if let Some(taker_fee_basis_points) = ix.taker_fee_basis_points {
        assert_valid_basis_points(taker_fee_basis_points.into())?;
    }
    if let Some(royalty_fee_share) = ix.royalty_fee_share {
        assert_valid_basis_points(royalty_fee_share)?;
    }

    let payment_manager = &mut ctx.accounts.payment_manager;
    if let Some(authority) = ix.authority {
        payment_manager.authority = authority;
    }
    if let Some(fee_collector) = ix.fee_collector {
        payment_manager.fee_collector = fee_collector;
    }
    if let Some(maker_fee_basis_points) = ix.maker_fee_basis_points {
        payment_manager.maker_fee_basis_points = maker_fee_basis_points;
    }
    if let Some(taker_fee_basis_points) = ix.taker_fee_basis_points {
        payment_manager.taker_fee_basis_points = taker_fee_basis_points;
    }
    if let Some(include_seller_fee_basis_points) = ix.include_seller_fee_basis_points {
        payment_manager.include_seller_fee_basis_points = include_seller_fee_basis_points;
    }
    if let Some(royalty_fee_share) = ix.royalty_fee_share {
        payment_manager.royalty_fee_share = Some(royalty_fee_share);
    }

    emit!(PaymentManagerUpdated {
        payment_manager: payment_manager.key(),
        authority: payment_manager.authority,
        fee_collector: payment_manager.fee_collector,
        maker_fee_basis_points: payment_manager.maker_fee_basis_points,
        taker_fee_basis_points: payment_manager.taker_fee_basis_points,
        include_seller_fee_basis_points: payment_manager.include_seller_fee_basis_points,
        royalty_fee_share: payment_manager.royalty_fee_share,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
