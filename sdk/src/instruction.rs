//! Typed instruction builders for the payment manager program.
//!
//! Account lists come from the program's generated `accounts` structs, so
//! they cannot drift from the on-chain schema.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::system_program;
use anchor_lang::{InstructionData, ToAccountMetas};
use payment_manager::instructions::{InitIx, UpdateIx};

pub fn init(
    payment_manager_address: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    ix: InitIx,
) -> Instruction {
    Instruction {
        program_id: payment_manager::ID,
        accounts: payment_manager::accounts::Init {
            payment_manager: *payment_manager_address,
            authority: *authority,
            payer: *payer,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: payment_manager::instruction::Init { ix }.data(),
    }
}

pub fn update(payment_manager_address: &Pubkey, authority: &Pubkey, ix: UpdateIx) -> Instruction {
    Instruction {
        program_id: payment_manager::ID,
        accounts: payment_manager::accounts::Update {
            payment_manager: *payment_manager_address,
            authority: *authority,
        }
        .to_account_metas(None),
        data: payment_manager::instruction::Update { ix }.data(),
    }
}

pub fn close(payment_manager_address: &Pubkey, collector: &Pubkey, closer: &Pubkey) -> Instruction {
    Instruction {
        program_id: payment_manager::ID,
        accounts: payment_manager::accounts::Close {
            payment_manager: *payment_manager_address,
            collector: *collector,
            closer: *closer,
        }
        .to_account_metas(None),
        data: payment_manager::instruction::Close {}.data(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn manage_payment(
    payment_manager_address: &Pubkey,
    payer_token_account: &Pubkey,
    fee_collector_token_account: &Pubkey,
    payment_token_account: &Pubkey,
    payment_mint: &Pubkey,
    payer: &Pubkey,
    payment_amount: u64,
) -> Instruction {
    Instruction {
        program_id: payment_manager::ID,
        accounts: payment_manager::accounts::ManagePayment {
            payment_manager: *payment_manager_address,
            payer_token_account: *payer_token_account,
            fee_collector_token_account: *fee_collector_token_account,
            payment_token_account: *payment_token_account,
            payment_mint: *payment_mint,
            payer: *payer,
            token_program: spl_token::ID,
        }
        .to_account_metas(None),
        data: payment_manager::instruction::ManagePayment { payment_amount }.data(),
    }
}

/// Builds the token-currency royalty settlement instruction.
/// `remaining_accounts` must already be in trailing-list order: creator
/// token accounts in metadata order, then optionally a buy-side account.
#[allow(clippy::too_many_arguments)]
pub fn handle_payment_with_royalties(
    payment_manager_address: &Pubkey,
    payer_token_account: &Pubkey,
    fee_collector_token_account: &Pubkey,
    payment_token_account: &Pubkey,
    payment_mint: &Pubkey,
    mint: &Pubkey,
    mint_metadata: &Pubkey,
    payer: &Pubkey,
    payment_amount: u64,
    remaining_accounts: Vec<AccountMeta>,
) -> Instruction {
    let mut accounts = payment_manager::accounts::HandlePaymentWithRoyalties {
        payment_manager: *payment_manager_address,
        payer_token_account: *payer_token_account,
        fee_collector_token_account: *fee_collector_token_account,
        payment_token_account: *payment_token_account,
        payment_mint: *payment_mint,
        mint: *mint,
        mint_metadata: *mint_metadata,
        payer: *payer,
        token_program: spl_token::ID,
    }
    .to_account_metas(None);
    accounts.extend(remaining_accounts);
    Instruction {
        program_id: payment_manager::ID,
        accounts,
        data: payment_manager::instruction::HandlePaymentWithRoyalties { payment_amount }.data(),
    }
}

/// Builds the native-currency royalty settlement instruction.
/// `remaining_accounts` must already be in trailing-list order: creator
/// wallets in metadata order, then optionally a buy-side wallet.
#[allow(clippy::too_many_arguments)]
pub fn handle_native_payment_with_royalties(
    payment_manager_address: &Pubkey,
    fee_collector: &Pubkey,
    payment_target: &Pubkey,
    payer: &Pubkey,
    mint: &Pubkey,
    mint_metadata: &Pubkey,
    payment_amount: u64,
    remaining_accounts: Vec<AccountMeta>,
) -> Instruction {
    let mut accounts = payment_manager::accounts::HandleNativePaymentWithRoyalties {
        payment_manager: *payment_manager_address,
        fee_collector: *fee_collector,
        payment_target: *payment_target,
        payer: *payer,
        mint: *mint,
        mint_metadata: *mint_metadata,
        system_program: system_program::ID,
    }
    .to_account_metas(None);
    accounts.extend(remaining_accounts);
    Instruction {
        program_id: payment_manager::ID,
        accounts,
        data: payment_manager::instruction::HandleNativePaymentWithRoyalties { payment_amount }
            .data(),
    }
}
