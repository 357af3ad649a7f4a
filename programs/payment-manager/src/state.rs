use anchor_lang::prelude::*;

/// Named fee policy record
/// The address is a PDA of the name, so each name exists at most once
#[account]
pub struct PaymentManager {
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Identifier, immutable after init (doubles as the PDA seed)
    pub name: String,
    /// Address permitted to update or close this record
    pub authority: Pubkey,
    /// Destination for the non-royalty portion of fees
    pub fee_collector: Pubkey,
    /// Fee charged to the posting party, in basis points of the payment
    pub maker_fee_basis_points: u16,
    /// Fee charged to the accepting party, in basis points of the payment
    pub taker_fee_basis_points: u16,
    /// Whether the mint's own seller-fee-basis-points is added to the fee pool
    pub include_seller_fee_basis_points: bool,
    /// Fraction of maker+taker fees redirected to creators, in basis points
    /// (unset is treated as 0)
    pub royalty_fee_share: Option<u64>,
}
