use anchor_lang::prelude::*;

#[event]
pub struct PaymentManagerInitialized {
    pub payment_manager: Pubkey,
    pub name: String,
    pub authority: Pubkey,
    pub fee_collector: Pubkey,
    pub maker_fee_basis_points: u16,
    pub taker_fee_basis_points: u16,
    pub include_seller_fee_basis_points: bool,
    pub royalty_fee_share: Option<u64>,
    pub timestamp: i64,
}

#[event]
pub struct PaymentManagerUpdated {
    pub payment_manager: Pubkey,
    pub authority: Pubkey,
    pub fee_collector: Pubkey,
    pub maker_fee_basis_points: u16,
    pub taker_fee_basis_points: u16,
    pub include_seller_fee_basis_points: bool,
    pub royalty_fee_share: Option<u64>,
    pub timestamp: i64,
}

#[event]
pub struct PaymentManagerClosed {
    pub payment_manager: Pubkey,
    pub name: String,
    pub collector: Pubkey,
    pub rent_reclaimed: u64,
    pub timestamp: i64,
}

#[event]
pub struct PaymentRouted {
    pub payment_manager: Pubkey,
    /// Default pubkey for native (lamport) payments
    pub payment_mint: Pubkey,
    pub payment_amount: u64,
    pub maker_fee: u64,
    pub taker_fee: u64,
    pub seller_fee: u64,
    pub total_fees: u64,
    pub royalties_paid: u64,
    pub buy_side_fee: u64,
    pub fee_collector_amount: u64,
    pub payment_target_amount: u64,
    pub timestamp: i64,
}
