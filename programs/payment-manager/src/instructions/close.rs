use anchor_lang::prelude::*;

use crate::{
    constants::{CRANK_KEY, PAYMENT_MANAGER_SEED},
    errors::ErrorCode,
    events::PaymentManagerClosed,
    state::PaymentManager,
};

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(
        mut,
        seeds = [PAYMENT_MANAGER_SEED.as_bytes(), payment_manager.name.as_bytes()],
        bump = payment_manager.bump,
        close = collector
    )]
    pub payment_manager: Account<'info, PaymentManager>,

    /// CHECK: Receives the reclaimed rent
    #[account(mut)]
    pub collector: UncheckedAccount<'info>,

    #[account(
        constraint = closer.key() == payment_manager.authority || closer.key() == CRANK_KEY
            @ ErrorCode::InvalidCloser
    )]
    pub closer: Signer<'info>,
}

/// Closes a payment manager record and reclaims its rent
/// Terminal: subsequent reads of the address return nothing
pub fn handler(ctx: Context<Close>) -> Result<()> {
    let payment_manager = &ctx.accounts.payment_manager;
    let rent_reclaimed = payment_manager.to_account_info().lamports();

    emit!(PaymentManagerClosed {
        payment_manager: payment_manager.key(),
        name: payment_manager.name.clone(),
        collector: ctx.accounts.collector.key(),
        rent_reclaimed,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
