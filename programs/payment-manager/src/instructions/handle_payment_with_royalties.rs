use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{
    constants::PAYMENT_MANAGER_SEED,
    errors::ErrorCode,
    events::PaymentRouted,
    fees::{FeeBreakdown, FeeParams, PaymentKind},
    state::PaymentManager,
    utils::read_royalty_metadata,
};

#[derive(Accounts)]
pub struct HandlePaymentWithRoyalties<'info> {
    #[account(
        seeds = [PAYMENT_MANAGER_SEED.as_bytes(), payment_manager.name.as_bytes()],
        bump = payment_manager.bump
    )]
    pub payment_manager: Box<Account<'info, PaymentManager>>,

    #[account(
        mut,
        constraint = payer_token_account.mint == payment_mint.key() @ ErrorCode::InvalidPaymentMint
    )]
    pub payer_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = fee_collector_token_account.owner == payment_manager.fee_collector
            @ ErrorCode::InvalidFeeCollector
    )]
    pub fee_collector_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub payment_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The mint whose metadata carries the creator royalty table
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Validated against the canonical metadata PDA in the handler
    pub mint_metadata: UncheckedAccount<'info>,

    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    // > Remaining accounts: one payment-mint token account per nonzero-share
    // > creator in metadata order, then optionally a buy-side token account
}

/// Routes a token payment with creator royalties
/// The trailing account list is positional protocol: position N is paid
/// creator N's cut. Order is the caller's responsibility.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, HandlePaymentWithRoyalties<'info>>,
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
        kind: PaymentKind::Token,
        payment_amount,
        maker_fee_basis_points: payment_manager.maker_fee_basis_points,
        taker_fee_basis_points: payment_manager.taker_fee_basis_points,
        include_seller_fee_basis_points: payment_manager.include_seller_fee_basis_points,
        seller_fee_basis_points: royalty_metadata.seller_fee_basis_points,
        royalty_fee_share: payment_manager.royalty_fee_share,
        creators: &royalty_metadata.creators,
        has_buy_side_receiver: buy_side_info.is_some(),
    })?;

    let decimals = ctx.accounts.payment_mint.decimals;
    let transfer = |to: AccountInfo<'info>, amount: u64| -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let cpi_accounts = TransferChecked {
            from: ctx.accounts.payer_token_account.to_account_info(),
            mint: ctx.accounts.payment_mint.to_account_info(),
            to,
            authority: ctx.accounts.payer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, decimals)
    };

    let mut royalties_paid: u64 = 0;
    for (i, amount) in breakdown.creator_amounts.iter().enumerate() {
        transfer(ctx.remaining_accounts[i].clone(), *amount)?;
        royalties_paid = royalties_paid
            .checked_add(*amount)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    if let Some(buy_side_info) = buy_side_info {
        transfer(buy_side_info.clone(), breakdown.buy_side_fee)?;
    }

    transfer(
        ctx.accounts.fee_collector_token_account.to_account_info(),
        breakdown.fee_collector_amount,
    )?;
    transfer(
        ctx.accounts.payment_token_account.to_account_info(),
        breakdown.payment_target_amount,
    )?;

    emit!(PaymentRouted {
        payment_manager: payment_manager.key(),
        payment_mint: ctx.accounts.payment_mint.key(),
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
