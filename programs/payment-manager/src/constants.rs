use anchor_lang::pubkey;
use anchor_lang::solana_program::pubkey::Pubkey;

// Fee configuration
pub const BASIS_POINTS_DIVISOR: u64 = 10000;
pub const MAX_BASIS_POINTS: u64 = 10000;
pub const DEFAULT_BUY_SIDE_FEE_SHARE: u64 = 50; // 0.5%
pub const DEFAULT_ROYALTY_FEE_SHARE: u64 = 0;

// Creator shares are expressed out of a 100-point pool, not basis points
pub const CREATOR_SHARE_DIVISOR: u64 = 100;

// PDA seed for payment manager records
pub const PAYMENT_MANAGER_SEED: &str = "payment-manager";

// Name length bounds (enforced at init, reserved in account space)
pub const MAX_NAME_LENGTH: usize = 32;

// Permissionless identity allowed to close records on behalf of anyone
pub const CRANK_KEY: Pubkey = pubkey!("crkdpVWjHWdggGgBuSyAqSmZUmAjYLzD435tcLDRLXr");

// PaymentManager account size:
// - discriminator: 8
// - bump: 1
// - name: 4 + 32 (borsh string, max length reserved)
// - authority: 32
// - fee_collector: 32
// - maker_fee_basis_points: 2
// - taker_fee_basis_points: 2
// - include_seller_fee_basis_points: 1
// - royalty_fee_share: 1 + 8 (option tag + u64)
// Total: 123
pub const PAYMENT_MANAGER_SIZE: usize = 8 + 1 + (4 + MAX_NAME_LENGTH) + 32 + 32 + 2 + 2 + 1 + (1 + 8);
