use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod fees;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("pmvYY6Wgvpe3DEj3UX1FcRpMx43sMLYLJrFTVGcqpdn");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Payment Manager",
    project_url: "https://github.com/paystream-labs/payment-manager",
    contacts: "email:security@paystream.dev,link:https://github.com/paystream-labs/payment-manager/security",
    policy: "https://github.com/paystream-labs/payment-manager/blob/main/SECURITY.md",
    source_code: "https://github.com/paystream-labs/payment-manager",
    source_release: "v0.1.0"
}

#[program]
pub mod payment_manager {
    use super::*;

    /// Creates a named payment manager record
    /// The name doubles as the uniqueness key - re-initializing an existing
    /// name fails at the account `init` constraint
    pub fn init(ctx: Context<Init>, ix: InitIx) -> Result<()> {
        instructions::init::handler(ctx, ix)
    }

    /// Updates an existing payment manager
    /// Only callable by the stored authority; unset fields retain prior values
    pub fn update(ctx: Context<Update>, ix: UpdateIx) -> Result<()> {
        instructions::update::handler(ctx, ix)
    }

    /// Closes a payment manager and reclaims rent to the collector
    /// Callable by the authority or the permissionless crank key
    pub fn close(ctx: Context<Close>) -> Result<()> {
        instructions::close::handler(ctx)
    }

    /// Routes a token payment with no royalty metadata
    /// Fee collector receives maker+taker fees, target receives the remainder
    pub fn manage_payment(ctx: Context<ManagePayment>, payment_amount: u64) -> Result<()> {
        instructions::manage_payment::handler(ctx, payment_amount)
    }

    /// Routes a token payment with creator royalties
    /// Trailing accounts: one payment-mint token account per nonzero-share
    /// creator in metadata order, then optionally a buy-side token account
    pub fn handle_payment_with_royalties<'info>(
        ctx: Context<'_, '_, 'info, 'info, HandlePaymentWithRoyalties<'info>>,
        payment_amount: u64,
    ) -> Result<()> {
        instructions::handle_payment_with_royalties::handler(ctx, payment_amount)
    }

    /// Routes a native (lamport) payment with creator royalties
    /// Trailing accounts: creator wallets in metadata order, then optionally
    /// a buy-side wallet
    pub fn handle_native_payment_with_royalties<'info>(
        ctx: Context<'_, '_, 'info, 'info, HandleNativePaymentWithRoyalties<'info>>,
        payment_amount: u64,
    ) -> Result<()> {
        instructions::handle_native_payment_with_royalties::handler(ctx, payment_amount)
    }
}
