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
};

#[derive(Accounts)]
pub struct ManagePayment<'info> {
    #[account(
        seeds = [PAYMENT_MANAGER_SEED.as_bytes(), payment_manager.name.as_bytes()],
        bump = payment_manager.bump
    )]
    pub payment_manager: Account<'info, PaymentManager>,

    #[account(
        mut,
        constraint = payer_token_account.mint == payment_mint.key() @ ErrorCode::InvalidPaymentMint
    )]
    pub payer_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = fee_collector_token_account.owner == payment_manager.fee_collector
            @ ErrorCode::InvalidFeeCollector
    )]
    pub fee_collector_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub payment_token_account: InterfaceAccount<'info, TokenAccount>,

    pub payment_mint: InterfaceAccount<'info, Mint>,

    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Routes a token payment with no royalty metadata
pub fn handler(ctx: Context<ManagePayment>, payment_amount: u64) -> Result<()> {
    let payment_manager = &ctx.accounts.payment_manager;

    let breakdown = FeeBreakdown::compute(FeeParams {
        kind: PaymentKind::Token,
        payment_amount,
        maker_fee_basis_points: payment_manager.maker_fee_basis_points,
        taker_fee_basis_points: payment_manager.taker_fee_basis_points,
        include_seller_fee_basis_points: false,
        seller_fee_basis_points: 0,
        royalty_fee_share: payment_manager.royalty_fee_share,
        creators: &[],
        has_buy_side_receiver: false,
    })?;

    let decimals = ctx.accounts.payment_mint.decimals;

    if breakdown.fee_collector_amount > 0 {
        let cpi_accounts = TransferChecked {
            from: ctx.accounts.payer_token_account.to_account_info(),
            mint: ctx.accounts.payment_mint.to_account_info(),
            to: ctx.accounts.fee_collector_token_account.to_account_info(),
            authority: ctx.accounts.payer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, breakdown.fee_collector_amount, decimals)?;
    }

    if breakdown.payment_target_amount > 0 {
        let cpi_accounts = TransferChecked {
            from: ctx.accounts.payer_token_account.to_account_info(),
            mint: ctx.accounts.payment_mint.to_account_info(),
            to: ctx.accounts.payment_token_account.to_account_info(),
            authority: ctx.accounts.payer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, breakdown.payment_target_amount, decimals)?;
    }

    emit!(PaymentRouted {
        payment_manager: payment_manager.key(),
        payment_mint: ctx.accounts.payment_mint.key(),
        payment_amount,
        maker_fee: breakdown.maker_fee,
        taker_fee: breakdown.taker_fee,
        seller_fee: 0,
        total_fees: breakdown.total_fees,
        royalties_paid: 0,
        buy_side_fee: 0,
        fee_collector_amount: breakdown.fee_collector_amount,
        payment_target_amount: breakdown.payment_target_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
