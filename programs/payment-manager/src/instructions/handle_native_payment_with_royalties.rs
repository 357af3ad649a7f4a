use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token_interface::Mint;

use crate::{
    constants::PAYMENT_MANAGER_SEED,
    errors::ErrorCode,
    events::PaymentRouted,
    fees::{FeeBreakdown, FeeParams, PaymentKind},
    state::PaymentManager,
    utils::read_royalty_metadata,
};

#[derive(Accounts)]
pub struct HandleNativePaymentWithRoyalties<'info> {
    #[account(
        seeds = [PAYMENT_MANAGER_SEED.as_bytes(), payment_manager.name.as_bytes()],
        bump = payment_manager.bump
    )]
    pub payment_manager: Box<Account<'info, PaymentManager>>,

    /// CHECK: Constrained to the stored fee collector
    #[account(
        mut,
        constraint = fee_collector.key() == payment_manager.fee_collector
            @ ErrorCode::InvalidFeeCollector
    )]
    pub fee_collector: UncheckedAccount<'info>,

    /// CHECK: Wallet that collects the net payment
    #[account(mut)]
    pub payment_target: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// The mint whose metadata carries the creator royalty table
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Validated against the canonical metadata PDA in the handler
    pub mint_metadata: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    // > Remaining accounts: one wallet per nonzero-share creator in metadata
    // > order, then optionally a buy-side wallet
}

/// Routes a native (lamport) payment with creator royalties
/// Native transfers need no pre-existing destination accounts, so the
/// trailing list holds the creator wallets themselves.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, HandleNativePaymentWithRoyalties<'info>>,
    payment_amount: u64,
) -> Result<()> {
    let payment_manager = &ctx.accounts.payment_manager;

    let royalty_metadata = read_royalty_metadata(
        &ctx.accounts.mint.key(),
        &ctx.accounts.mint_metadata.to_account_info(),
    )?;
    let creator_count = royalty_metadata.creators.len();

    require!(
        ctx.remaining_accounts.len() >= creator_count,
        ErrorCode::InsufficientRemainingAccounts
    );
    let buy_side_info = ctx.remaining_accounts.get(creator_count);

    let breakdown = FeeBreakdown::compute(FeeParams {
        kind: PaymentKind::Native,
        payment_amount,
        maker_fee_basis_points: payment_manager.maker_fee_basis_points,
        taker_fee_basis_points: payment_manager.taker_fee_basis_points,
        include_seller_fee_basis_points: payment_manager.include_seller_fee_basis_points,
        seller_fee_basis_points: royalty_metadata.seller_fee_basis_points,
        royalty_fee_share: payment_manager.royalty_fee_share,
        creators: &royalty_metadata.creators,
        has_buy_side_receiver: buy_side_info.is_some(),
    })?;

    let pay = |to: AccountInfo<'info>, amount: u64| -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to,
            },
        );
        system_program::transfer(cpi_ctx, amount)
    };

    let mut royalties_paid: u64 = 0;
    for (i, amount) in breakdown.creator_amounts.iter().enumerate() {
        pay(ctx.remaining_accounts[i].clone(), *amount)?;
        royalties_paid = royalties_paid
            .checked_add(*amount)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    if let Some(buy_side_info) = buy_side_info {
        pay(buy_side_info.clone(), breakdown.buy_side_fee)?;
    }

    pay(
        ctx.accounts.fee_collector.to_account_info(),
        breakdown.fee_collector_amount,
    )?;
    pay(
        ctx.accounts.payment_target.to_account_info(),
        breakdown.payment_target_amount,
    )?;

    emit!(PaymentRouted {
        payment_manager: payment_manager.key(),
        payment_mint: Pubkey::default(),
        payment_amount,
        maker_fee: breakdown.maker_fee,
        taker_fee: breakdown.taker_fee,
        seller_fee: breakdown.seller_fee,
        total_fees: breakdown.total_fees,
        royalties_paid,
        buy_side_fee: breakdown.buy_side_fee,
        fee_collector_amount: breakdown.fee_collector_amount,
        payment_target_amount: breakdown.payment_target_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
