use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_NAME_LENGTH, PAYMENT_MANAGER_SEED, PAYMENT_MANAGER_SIZE},
    errors::ErrorCode,
    events::PaymentManagerInitialized,
    fees::assert_valid_basis_points,
    state::PaymentManager,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitIx {
    pub name: String,
    pub fee_collector: Pubkey,
    pub maker_fee_basis_points: u16,
    pub taker_fee_basis_points: u16,
    pub include_seller_fee_basis_points: bool,
    pub royalty_fee_share: Option<u64>,
}

#[derive(Accounts)]
#[instruction(ix: InitIx)]
pub struct Init<'info> {
    #[account(
        init,
        payer = payer,
        space = PAYMENT_MANAGER_SIZE,
        seeds = [PAYMENT_MANAGER_SEED.as_bytes(), ix.name.as_bytes()],
        bump
    )]
    pub payment_manager: Account<'info, PaymentManager>,

    /// CHECK: Recorded as the record's authority, not required to sign
    pub authority: AccountInfo<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a named payment manager record
pub fn handler(ctx: Context<Init>, ix: InitIx) -> Result<()> {
    require!(
        !ix.name.is_empty() && ix.name.len() <= MAX_NAME_LENGTH,
        ErrorCode::InvalidName
    );
    assert_valid_basis_points(ix.maker_fee_basis_points.into())?;
    assert_valid_basis_points(ix.taker_fee_basis_points.into())?;
    if let Some(royalty_fee_share) = ix.royalty_fee_share {
        assert_valid_basis_points(royalty_fee_share)?;
    }

    let payment_manager = &mut ctx.accounts.payment_manager;
    payment_manager.bump = ctx.bumps.payment_manager;
    payment_manager.name = ix.name.clone();
    payment_manager.authority = ctx.accounts.authority.key();
    payment_manager.fee_collector = ix.fee_collector;
    payment_manager.maker_fee_basis_points = ix.maker_fee_basis_points;
    payment_manager.taker_fee_basis_points = ix.taker_fee_basis_points;
    payment_manager.include_seller_fee_basis_points = ix.include_seller_fee_basis_points;
    payment_manager.royalty_fee_share = ix.royalty_fee_share;

    emit!(PaymentManagerInitialized {
        payment_manager: payment_manager.key(),
        name: ix.name,
        authority: ctx.accounts.authority.key(),
        fee_collector: ix.fee_collector,
        maker_fee_basis_points: ix.maker_fee_basis_points,
        taker_fee_basis_points: ix.taker_fee_basis_points,
        include_seller_fee_basis_points: ix.include_seller_fee_basis_points,
        royalty_fee_share: ix.royalty_fee_share,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
