//! Assembly of the positional trailing account lists consumed by the
//! settlement instructions.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::solana_program::program_pack::Pack;
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::Account as TokenAccountState;

use crate::accounts::get_payment_manager;
use crate::error::SdkError;
use crate::ledger::LedgerReader;
use crate::metadata::read_creator_metadata;
use crate::pda::find_mint_metadata_address;
use crate::transaction::TransactionBuffer;

/// Currency a payment settles in. Token payments route through associated
/// token accounts; native payments route lamports straight to wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentCurrency {
    Native,
    Token(Pubkey),
}

/// Resolved accounts for a token payment instruction.
pub struct PaymentAccounts {
    pub payment_token_account: Pubkey,
    pub fee_collector_token_account: Pubkey,
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Builds the trailing account list for a royalty settlement: one
/// destination per nonzero-share creator in metadata order, then the
/// buy-side account last if one participates.
///
/// Destination-creation instructions for missing token accounts are
/// appended to `buffer` so every listed address exists before the payment
/// executes. Creators in `excluded_creators` are resolved by derivation
/// only; if their account is missing that surfaces at execution time, not
/// here. Absent or unparsable metadata degrades to an empty creator list.
///
/// The returned order is load-bearing: the program pays position N to
/// creator N. Any permutation misroutes funds.
pub async fn with_remaining_accounts_for_royalties(
    buffer: &mut TransactionBuffer,
    ledger: &dyn LedgerReader,
    mint: &Pubkey,
    currency: PaymentCurrency,
    payer: &Pubkey,
    buy_side_receiver: Option<&Pubkey>,
    excluded_creators: &[Pubkey],
) -> Result<Vec<AccountMeta>, SdkError> {
    let mut remaining_accounts = Vec::new();

    let creators = read_creator_metadata(ledger, mint)
        .await?
        .map(|metadata| metadata.creators)
        .unwrap_or_default();

    for creator in creators.iter().filter(|creator| creator.share != 0) {
        let destination = match currency {
            PaymentCurrency::Native => creator.address,
            PaymentCurrency::Token(payment_mint) => {
                if excluded_creators.contains(&creator.address) {
                    get_associated_token_address(&creator.address, &payment_mint)
                } else {
                    buffer
                        .find_or_create_associated_token_account(
                            ledger,
                            &payment_mint,
                            &creator.address,
                            payer,
                        )
                        .await?
                }
            }
        };
        remaining_accounts.push(AccountMeta::new(destination, false));
    }

    // Fixed position: always last, regardless of creator count.
    if let Some(buy_side_receiver) = buy_side_receiver {
        remaining_accounts.push(AccountMeta::new(*buy_side_receiver, false));
    }

    Ok(remaining_accounts)
}

/// Resolves the full account set for a token payment: the payment
/// destination, the fee collector's token account, and the trailing list
/// (payment mint, mint, metadata, then royalty destinations).
///
/// With `receipt_mint` set, the payment destination belongs to whoever
/// holds the receipt token; otherwise it belongs to `issuer`. The issuer is
/// excluded from royalty destination creation since a selling creator
/// already holds an account.
#[allow(clippy::too_many_arguments)]
pub async fn with_remaining_accounts_for_payment(
    buffer: &mut TransactionBuffer,
    ledger: &dyn LedgerReader,
    mint: &Pubkey,
    payment_mint: &Pubkey,
    issuer: &Pubkey,
    payment_manager_address: &Pubkey,
    payer: &Pubkey,
    receipt_mint: Option<&Pubkey>,
) -> Result<PaymentAccounts, SdkError> {
    let royalties_remaining_accounts = with_remaining_accounts_for_royalties(
        buffer,
        ledger,
        mint,
        PaymentCurrency::Token(*payment_mint),
        payer,
        None,
        &[*issuer],
    )
    .await?;

    let (mint_metadata, _) = find_mint_metadata_address(mint);
    let mut remaining_accounts = Vec::new();

    let payment_token_account = match receipt_mint {
        Some(receipt_mint) => {
            // The receipt holder, not the issuer, collects the payment.
            let receipt_token_account_address = ledger
                .largest_token_account(receipt_mint)
                .await?
                .ok_or(SdkError::NoReceiptTokenAccount {
                    mint: *receipt_mint,
                })?;
            let receipt_data = ledger
                .account_data(&receipt_token_account_address)
                .await?
                .ok_or(SdkError::AccountNotFound(receipt_token_account_address))?;
            let receipt_token_account =
                TokenAccountState::unpack(&receipt_data).map_err(|e| {
                    SdkError::InvalidAccountData {
                        address: receipt_token_account_address,
                        reason: e.to_string(),
                    }
                })?;

            remaining_accounts.push(AccountMeta::new(receipt_token_account_address, false));

            if receipt_token_account.owner == *payer {
                get_associated_token_address(&receipt_token_account.owner, payment_mint)
            } else {
                buffer
                    .find_or_create_associated_token_account(
                        ledger,
                        payment_mint,
                        &receipt_token_account.owner,
                        payer,
                    )
                    .await?
            }
        }
        None => {
            if issuer == payer {
                get_associated_token_address(issuer, payment_mint)
            } else {
                buffer
                    .find_or_create_associated_token_account(ledger, payment_mint, issuer, payer)
                    .await?
            }
        }
    };

    remaining_accounts.push(AccountMeta::new(*payment_mint, false));
    remaining_accounts.push(AccountMeta::new(*mint, false));
    remaining_accounts.push(AccountMeta::new(mint_metadata, false));
    remaining_accounts.extend(royalties_remaining_accounts);

    // A missing record falls back to the record address itself so the
    // instruction still assembles; it then fails on-chain, where the
    // constraint error names the account.
    let fee_collector = get_payment_manager(ledger, payment_manager_address)
        .await?
        .map(|record| record.fee_collector)
        .unwrap_or(*payment_manager_address);
    let fee_collector_token_account = buffer
        .find_or_create_associated_token_account(ledger, payment_mint, &fee_collector, payer)
        .await?;

    Ok(PaymentAccounts {
        payment_token_account,
        fee_collector_token_account,
        remaining_accounts,
    })
}
