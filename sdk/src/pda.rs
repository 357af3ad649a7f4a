use anchor_lang::prelude::Pubkey;
use mpl_token_metadata::accounts::Metadata;
use payment_manager::constants::PAYMENT_MANAGER_SEED;

/// Derives the payment manager record address for a name.
/// Deterministic: the name fully determines the address.
pub fn find_payment_manager_address(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PAYMENT_MANAGER_SEED.as_bytes(), name.as_bytes()],
        &payment_manager::ID,
    )
}

/// Derives the canonical metadata account address for a mint.
pub fn find_mint_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Metadata::find_pda(mint)
}
