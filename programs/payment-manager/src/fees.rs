//! Pure fee settlement math
//!
//! Computes how a payment amount splits between creator royalties, an
//! optional buy-side receiver, the fee collector, and the payment target.
//! No accounts are touched here; handlers move funds according to the
//! returned breakdown, and off-chain callers use the same math for audit.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::ErrorCode};

/// Settlement topology. The token and native paths evolved separately and
/// account the buy-side fee differently, so the variant is explicit rather
/// than inferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentKind {
    /// Lamport settlement. The buy-side charge is always deducted from the
    /// target's net; the fee collector retains it when no receiver is present.
    Native,
    /// SPL token settlement. The buy-side fee is charged only when a receiver
    /// account is supplied and never reduces the collector's cut.
    Token,
}

/// A royalty recipient with a nonzero share of the 100-point creator pool.
/// Callers filter zero-share creators out before computing; the breakdown's
/// `creator_amounts` align positionally with this list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatorShare {
    pub address: Pubkey,
    pub share: u8,
}

pub struct FeeParams<'a> {
    pub kind: PaymentKind,
    pub payment_amount: u64,
    pub maker_fee_basis_points: u16,
    pub taker_fee_basis_points: u16,
    pub include_seller_fee_basis_points: bool,
    pub seller_fee_basis_points: u16,
    pub royalty_fee_share: Option<u64>,
    pub creators: &'a [CreatorShare],
    pub has_buy_side_receiver: bool,
}

/// Full settlement of one payment, in the payment's base units.
/// Transient - never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub maker_fee: u64,
    pub taker_fee: u64,
    pub seller_fee: u64,
    pub total_fees: u64,
    pub royalty_pool: u64,
    /// One amount per entry of `FeeParams::creators`, in order
    pub creator_amounts: Vec<u64>,
    /// Amount actually paid to the buy-side receiver (0 when absent)
    pub buy_side_fee: u64,
    pub fee_collector_amount: u64,
    pub payment_target_amount: u64,
}

impl FeeBreakdown {
    pub fn compute(params: FeeParams) -> Result<FeeBreakdown> {
        let FeeParams {
            kind,
            payment_amount,
            maker_fee_basis_points,
            taker_fee_basis_points,
            include_seller_fee_basis_points,
            seller_fee_basis_points,
            royalty_fee_share,
            creators,
            has_buy_side_receiver,
        } = params;

        assert_valid_basis_points(maker_fee_basis_points.into())?;
        assert_valid_basis_points(taker_fee_basis_points.into())?;
        assert_valid_basis_points(seller_fee_basis_points.into())?;
        assert_valid_basis_points(royalty_fee_share.unwrap_or(DEFAULT_ROYALTY_FEE_SHARE))?;

        let maker_fee = basis_points_of(payment_amount, maker_fee_basis_points.into())?;
        let taker_fee = basis_points_of(payment_amount, taker_fee_basis_points.into())?;
        let fee_pool = maker_fee
            .checked_add(taker_fee)
            .ok_or(ErrorCode::MathOverflow)?;

        let seller_fee = if include_seller_fee_basis_points {
            basis_points_of(payment_amount, seller_fee_basis_points.into())?
        } else {
            0
        };

        // The seller fee is always fully allocated to the royalty pool,
        // regardless of the royalty fee share
        let royalty_pool = basis_points_of(
            fee_pool,
            royalty_fee_share.unwrap_or(DEFAULT_ROYALTY_FEE_SHARE),
        )?
        .checked_add(seller_fee)
        .ok_or(ErrorCode::MathOverflow)?;

        let total_fees = fee_pool
            .checked_add(seller_fee)
            .ok_or(ErrorCode::MathOverflow)?;

        let creator_amounts = split_royalty_pool(royalty_pool, creators)?;
        let royalties_paid: u64 = creator_amounts
            .iter()
            .try_fold(0u64, |acc, amount| acc.checked_add(*amount))
            .ok_or(ErrorCode::MathOverflow)?;

        let buy_side_charge = basis_points_of(payment_amount, DEFAULT_BUY_SIDE_FEE_SHARE)?;

        let (buy_side_fee, fee_collector_amount, payment_target_amount) = match kind {
            // The buy-side charge always reduces the target's net. It is paid
            // to the receiver when one participates, otherwise the collector
            // retains it.
            PaymentKind::Native => {
                let buy_side_fee = if has_buy_side_receiver { buy_side_charge } else { 0 };
                let fee_collector_amount = if has_buy_side_receiver {
                    total_fees
                        .checked_sub(royalties_paid)
                        .ok_or(ErrorCode::MathUnderflow)?
                        .checked_sub(buy_side_charge)
                        .ok_or(ErrorCode::MathUnderflow)?
                } else {
                    total_fees
                        .checked_add(buy_side_charge)
                        .ok_or(ErrorCode::MathOverflow)?
                        .checked_sub(royalties_paid)
                        .ok_or(ErrorCode::MathUnderflow)?
                };
                let payment_target_amount = payment_amount
                    .checked_add(taker_fee)
                    .ok_or(ErrorCode::MathOverflow)?
                    .checked_sub(total_fees)
                    .ok_or(ErrorCode::MathUnderflow)?
                    .checked_sub(buy_side_charge)
                    .ok_or(ErrorCode::MathUnderflow)?;
                (buy_side_fee, fee_collector_amount, payment_target_amount)
            }
            // The buy-side fee is charged only when a receiver account is
            // supplied, and only against the target's net - never against
            // the collector
            PaymentKind::Token => {
                let buy_side_fee = if has_buy_side_receiver { buy_side_charge } else { 0 };
                let fee_collector_amount = total_fees
                    .checked_sub(royalties_paid)
                    .ok_or(ErrorCode::MathUnderflow)?;
                let payment_target_amount = payment_amount
                    .checked_add(taker_fee)
                    .ok_or(ErrorCode::MathOverflow)?
                    .checked_sub(total_fees)
                    .ok_or(ErrorCode::MathUnderflow)?
                    .checked_sub(buy_side_fee)
                    .ok_or(ErrorCode::MathUnderflow)?;
                (buy_side_fee, fee_collector_amount, payment_target_amount)
            }
        };

        Ok(FeeBreakdown {
            maker_fee,
            taker_fee,
            seller_fee,
            total_fees,
            royalty_pool,
            creator_amounts,
            buy_side_fee,
            fee_collector_amount,
            payment_target_amount,
        })
    }
}

/// Rejects any fee rate outside 0..=10000 before computation
pub fn assert_valid_basis_points(basis_points: u64) -> Result<()> {
    require!(
        basis_points <= MAX_BASIS_POINTS,
        ErrorCode::InvalidBasisPoints
    );
    Ok(())
}

/// `floor(amount * basis_points / 10000)` via u128 intermediates
fn basis_points_of(amount: u64, basis_points: u64) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(basis_points as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BASIS_POINTS_DIVISOR as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Splits the royalty pool across creators by their 100-point shares.
///
/// Floor division leaves a remainder when the pool is not evenly divisible;
/// one extra base unit goes to each of the leading creators in array order
/// until the remainder is spent. The order is load-bearing: changing it
/// changes who receives rounding dust. When shares under-sum 100 the
/// remainder can exceed the creator count; each creator still gets at most
/// one extra unit and the rest stays with the fee collector.
fn split_royalty_pool(royalty_pool: u64, creators: &[CreatorShare]) -> Result<Vec<u64>> {
    let mut amounts = Vec::with_capacity(creators.len());
    let mut raw_sum: u64 = 0;
    for creator in creators {
        let raw = (royalty_pool as u128)
            .checked_mul(creator.share as u128)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(CREATOR_SHARE_DIVISOR as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        let raw = u64::try_from(raw).map_err(|_| error!(ErrorCode::MathOverflow))?;
        raw_sum = raw_sum.checked_add(raw).ok_or(ErrorCode::MathOverflow)?;
        amounts.push(raw);
    }

    let mut remainder = royalty_pool.saturating_sub(raw_sum);
    for amount in amounts.iter_mut() {
        if remainder == 0 {
            break;
        }
        *amount = amount.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        remainder -= 1;
    }

    Ok(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn creators(shares: &[u8]) -> Vec<CreatorShare> {
        shares
            .iter()
            .map(|share| CreatorShare {
                address: Pubkey::new_unique(),
                share: *share,
            })
            .collect()
    }

    fn reference_params(kind: PaymentKind, creators: &[CreatorShare]) -> FeeParams<'_> {
        FeeParams {
            kind,
            payment_amount: 1_000_000_000,
            maker_fee_basis_points: 500,
            taker_fee_basis_points: 300,
            include_seller_fee_basis_points: true,
            seller_fee_basis_points: 100,
            royalty_fee_share: Some(4500),
            creators,
            has_buy_side_receiver: true,
        }
    }

    fn assert_err(result: Result<FeeBreakdown>, expected: ErrorCode) {
        match result {
            Err(Error::AnchorError(e)) => {
                assert_eq!(e.error_code_number, 6000 + expected as u32)
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    #[test]
    fn native_reference_scenario() {
        let creators = creators(&[15, 30, 55]);
        let breakdown =
            FeeBreakdown::compute(reference_params(PaymentKind::Native, &creators)).unwrap();

        assert_eq!(breakdown.maker_fee, 50_000_000);
        assert_eq!(breakdown.taker_fee, 30_000_000);
        assert_eq!(breakdown.seller_fee, 10_000_000);
        assert_eq!(breakdown.total_fees, 90_000_000);
        // floor(80_000_000 * 0.45) + 10_000_000
        assert_eq!(breakdown.royalty_pool, 46_000_000);
        assert_eq!(
            breakdown.creator_amounts,
            vec![6_900_000, 13_800_000, 25_300_000]
        );
        assert_eq!(breakdown.buy_side_fee, 5_000_000);
        // 90M - 46M - 5M
        assert_eq!(breakdown.fee_collector_amount, 39_000_000);
        // 1000M + 30M - 90M - 5M
        assert_eq!(breakdown.payment_target_amount, 935_000_000);
    }

    #[test]
    fn token_reference_scenario() {
        let creators = creators(&[15, 30, 55]);
        let breakdown =
            FeeBreakdown::compute(reference_params(PaymentKind::Token, &creators)).unwrap();

        assert_eq!(breakdown.royalty_pool, 46_000_000);
        assert_eq!(breakdown.buy_side_fee, 5_000_000);
        // Token topology keeps the buy-side fee out of the collector's cut
        assert_eq!(breakdown.fee_collector_amount, 44_000_000);
        assert_eq!(breakdown.payment_target_amount, 935_000_000);
    }

    #[test]
    fn token_conserves_payer_outflow() {
        let creators = creators(&[15, 30, 55]);
        let breakdown =
            FeeBreakdown::compute(reference_params(PaymentKind::Token, &creators)).unwrap();

        // Payer is debited exactly payment_amount + taker_fee
        let outflow: u64 = breakdown.creator_amounts.iter().sum::<u64>()
            + breakdown.buy_side_fee
            + breakdown.fee_collector_amount
            + breakdown.payment_target_amount;
        assert_eq!(outflow, 1_000_000_000 + breakdown.taker_fee);
    }

    #[test]
    fn native_without_buy_side_receiver_collector_retains_charge() {
        let creators = creators(&[15, 30, 55]);
        let mut params = reference_params(PaymentKind::Native, &creators);
        params.has_buy_side_receiver = false;
        let breakdown = FeeBreakdown::compute(params).unwrap();

        assert_eq!(breakdown.buy_side_fee, 0);
        // 90M - 46M + retained 5M charge
        assert_eq!(breakdown.fee_collector_amount, 49_000_000);
        // The target's net is docked either way
        assert_eq!(breakdown.payment_target_amount, 935_000_000);
    }

    #[test]
    fn token_without_buy_side_receiver_skips_charge() {
        let creators = creators(&[15, 30, 55]);
        let mut params = reference_params(PaymentKind::Token, &creators);
        params.has_buy_side_receiver = false;
        let breakdown = FeeBreakdown::compute(params).unwrap();

        assert_eq!(breakdown.buy_side_fee, 0);
        assert_eq!(breakdown.fee_collector_amount, 44_000_000);
        assert_eq!(breakdown.payment_target_amount, 940_000_000);
    }

    #[test]
    fn zero_payment_yields_all_zero() {
        let creators = creators(&[15, 30, 55]);
        let mut params = reference_params(PaymentKind::Native, &creators);
        params.payment_amount = 0;
        let breakdown = FeeBreakdown::compute(params).unwrap();

        assert_eq!(breakdown.total_fees, 0);
        assert_eq!(breakdown.royalty_pool, 0);
        assert_eq!(breakdown.creator_amounts, vec![0, 0, 0]);
        assert_eq!(breakdown.buy_side_fee, 0);
        assert_eq!(breakdown.fee_collector_amount, 0);
        assert_eq!(breakdown.payment_target_amount, 0);
    }

    #[test]
    fn seller_fee_excluded_when_disabled() {
        let creators = creators(&[15, 30, 55]);
        let mut params = reference_params(PaymentKind::Token, &creators);
        params.include_seller_fee_basis_points = false;
        let breakdown = FeeBreakdown::compute(params).unwrap();

        assert_eq!(breakdown.seller_fee, 0);
        assert_eq!(breakdown.total_fees, 80_000_000);
        // Royalty pool computed from the maker+taker pool only
        assert_eq!(breakdown.royalty_pool, 36_000_000);
    }

    #[test]
    fn royalty_fee_share_defaults_to_zero() {
        let creators = creators(&[100]);
        let mut params = reference_params(PaymentKind::Token, &creators);
        params.royalty_fee_share = None;
        params.include_seller_fee_basis_points = false;
        let breakdown = FeeBreakdown::compute(params).unwrap();

        assert_eq!(breakdown.royalty_pool, 0);
        assert_eq!(breakdown.creator_amounts, vec![0]);
        assert_eq!(breakdown.fee_collector_amount, breakdown.total_fees);
    }

    #[test]
    fn remainder_is_front_loaded() {
        // Pool of 10 across [33, 33, 34]: floors are 3/3/3, one unit of dust
        let creators = creators(&[33, 33, 34]);
        let amounts = split_royalty_pool(10, &creators).unwrap();
        assert_eq!(amounts, vec![4, 3, 3]);
        assert_eq!(amounts.iter().sum::<u64>(), 10);
    }

    #[test]
    fn pool_conserved_when_shares_sum_to_100() {
        let creators = creators(&[15, 30, 55]);
        for pool in [0u64, 1, 7, 99, 100, 101, 46_000_000, 999_999_937] {
            let amounts = split_royalty_pool(pool, &creators).unwrap();
            assert_eq!(amounts.iter().sum::<u64>(), pool, "pool {}", pool);
        }
    }

    #[test]
    fn under_sum_shares_cap_extra_units() {
        // Shares sum to 50: half the pool is unassigned. Each creator gets at
        // most one extra unit; the rest stays with the fee collector.
        let creators = creators(&[25, 25]);
        let amounts = split_royalty_pool(1000, &creators).unwrap();
        assert_eq!(amounts, vec![251, 251]);
    }

    #[test]
    fn over_sum_shares_cannot_mint_funds() {
        // Metadata shares are not validated to sum to 100. When they
        // over-sum far enough that royalties exceed total fees, the
        // collector cut underflows and the computation is rejected.
        let creators = creators(&[200, 200]);
        let params = reference_params(PaymentKind::Token, &creators);
        assert_err(FeeBreakdown::compute(params), ErrorCode::MathUnderflow);
    }

    #[test]
    fn each_fee_bounded_by_payment() {
        let breakdown = FeeBreakdown::compute(FeeParams {
            kind: PaymentKind::Token,
            payment_amount: 12_345,
            maker_fee_basis_points: 10000,
            taker_fee_basis_points: 10000,
            include_seller_fee_basis_points: true,
            seller_fee_basis_points: 10000,
            royalty_fee_share: Some(10000),
            creators: &[],
            has_buy_side_receiver: false,
        })
        .unwrap();

        assert_eq!(breakdown.maker_fee, 12_345);
        assert_eq!(breakdown.taker_fee, 12_345);
        assert_eq!(breakdown.seller_fee, 12_345);
        // Combined fees may exceed the payment; each alone may not
        assert!(breakdown.total_fees > 12_345);
    }

    #[test]
    fn empty_creators_route_everything_to_collector() {
        let breakdown = FeeBreakdown::compute(FeeParams {
            kind: PaymentKind::Token,
            payment_amount: 1_000_000,
            maker_fee_basis_points: 500,
            taker_fee_basis_points: 300,
            include_seller_fee_basis_points: false,
            seller_fee_basis_points: 0,
            royalty_fee_share: Some(4500),
            creators: &[],
            has_buy_side_receiver: false,
        })
        .unwrap();

        assert!(breakdown.creator_amounts.is_empty());
        assert_eq!(breakdown.fee_collector_amount, breakdown.total_fees);
        assert_eq!(breakdown.payment_target_amount, 950_000);
    }

    #[test]
    fn invalid_basis_points_rejected() {
        let creators = creators(&[100]);
        let mut params = reference_params(PaymentKind::Token, &creators);
        params.maker_fee_basis_points = 10_001;
        assert_err(FeeBreakdown::compute(params), ErrorCode::InvalidBasisPoints);

        let mut params = reference_params(PaymentKind::Token, &creators);
        params.royalty_fee_share = Some(10_001);
        assert_err(FeeBreakdown::compute(params), ErrorCode::InvalidBasisPoints);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        // u64::MAX * 10000 bps exercises the u128 intermediate
        let breakdown = FeeBreakdown::compute(FeeParams {
            kind: PaymentKind::Token,
            payment_amount: u64::MAX,
            maker_fee_basis_points: 10000,
            taker_fee_basis_points: 0,
            include_seller_fee_basis_points: false,
            seller_fee_basis_points: 0,
            royalty_fee_share: None,
            creators: &[],
            has_buy_side_receiver: false,
        })
        .unwrap();
        assert_eq!(breakdown.maker_fee, u64::MAX);
    }
}
