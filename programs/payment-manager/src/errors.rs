use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Fee basis points must be between 0 and 10000")]
    InvalidBasisPoints,

    #[msg("Name must be between 1 and 32 characters")]
    InvalidName,

    #[msg("Fee collector account does not match the payment manager")]
    InvalidFeeCollector,

    #[msg("Token account mint does not match the payment mint")]
    InvalidPaymentMint,

    #[msg("Mint metadata account does not match the canonical metadata address")]
    InvalidMintMetadata,

    #[msg("Mint metadata account is not owned by the metadata program")]
    InvalidMintMetadataOwner,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Closer must be the authority or the crank key")]
    InvalidCloser,
}
