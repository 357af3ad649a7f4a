use std::collections::HashSet;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use payment_manager::instructions::{InitIx, UpdateIx};
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::accounts::get_payment_manager;
use crate::builder::{with_remaining_accounts_for_royalties, PaymentCurrency};
use crate::error::SdkError;
use crate::instruction;
use crate::ledger::LedgerReader;
use crate::pda::{find_mint_metadata_address, find_payment_manager_address};

/// Ordered instruction accumulator for a transaction being assembled.
///
/// Single writer: the buffer is owned by one flow for its duration. Callers
/// running creator resolutions concurrently must serialize their appends.
/// Abandoning a partially built buffer just drops its setup instructions.
#[derive(Debug, Default)]
pub struct TransactionBuffer {
    instructions: Vec<Instruction>,
    // Destinations whose creation instruction is already buffered, so a
    // second find-or-create for the same address appends nothing.
    pending_token_accounts: HashSet<Pubkey>,
}

impl TransactionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Resolves the associated token account for `(mint, owner)`, buffering
    /// a creation instruction if the account does not exist yet.
    ///
    /// Idempotent within one buffer: at most one creation instruction per
    /// destination, no matter how often it is called.
    pub async fn find_or_create_associated_token_account(
        &mut self,
        ledger: &dyn LedgerReader,
        mint: &Pubkey,
        owner: &Pubkey,
        payer: &Pubkey,
    ) -> Result<Pubkey, SdkError> {
        let address = get_associated_token_address(owner, mint);
        if self.pending_token_accounts.contains(&address)
            || ledger.account_exists(&address).await?
        {
            return Ok(address);
        }
        self.push(create_associated_token_account(
            payer,
            owner,
            mint,
            &spl_token::ID,
        ));
        self.pending_token_accounts.insert(address);
        Ok(address)
    }

    /// Buffers an init instruction and returns the record address.
    pub fn with_init(&mut self, payer: &Pubkey, authority: &Pubkey, ix: InitIx) -> Pubkey {
        let (address, _) = find_payment_manager_address(&ix.name);
        self.push(instruction::init(&address, payer, authority, ix));
        address
    }

    /// Buffers an update instruction for the named record.
    /// Fails with [`SdkError::PaymentManagerNotFound`] if the record does
    /// not exist, instead of buffering an instruction that cannot succeed.
    pub async fn with_update(
        &mut self,
        ledger: &dyn LedgerReader,
        name: &str,
        authority: &Pubkey,
        ix: UpdateIx,
    ) -> Result<Pubkey, SdkError> {
        let (address, _) = find_payment_manager_address(name);
        if get_payment_manager(ledger, &address).await?.is_none() {
            return Err(SdkError::PaymentManagerNotFound {
                name: name.to_string(),
                address,
            });
        }
        self.push(instruction::update(&address, authority, ix));
        Ok(address)
    }

    /// Buffers a close instruction for the named record.
    pub fn with_close(&mut self, name: &str, collector: &Pubkey, closer: &Pubkey) -> Pubkey {
        let (address, _) = find_payment_manager_address(name);
        self.push(instruction::close(&address, collector, closer));
        address
    }

    /// Buffers a royalty-free token payment through the named record.
    #[allow(clippy::too_many_arguments)]
    pub fn with_manage_payment(
        &mut self,
        name: &str,
        payment_amount: u64,
        payer_token_account: &Pubkey,
        fee_collector_token_account: &Pubkey,
        payment_token_account: &Pubkey,
        payment_mint: &Pubkey,
        payer: &Pubkey,
    ) -> Pubkey {
        let (address, _) = find_payment_manager_address(name);
        self.push(instruction::manage_payment(
            &address,
            payer_token_account,
            fee_collector_token_account,
            payment_token_account,
            payment_mint,
            payer,
            payment_amount,
        ));
        address
    }

    /// Buffers a token royalty settlement, assembling the trailing account
    /// list (and any destination-creation instructions) first.
    #[allow(clippy::too_many_arguments)]
    pub async fn with_handle_payment_with_royalties(
        &mut self,
        ledger: &dyn LedgerReader,
        name: &str,
        payment_amount: u64,
        mint: &Pubkey,
        payment_mint: &Pubkey,
        payer_token_account: &Pubkey,
        fee_collector_token_account: &Pubkey,
        payment_token_account: &Pubkey,
        payer: &Pubkey,
        buy_side_token_account: Option<&Pubkey>,
        excluded_creators: &[Pubkey],
    ) -> Result<Pubkey, SdkError> {
        let (address, _) = find_payment_manager_address(name);
        let remaining_accounts = with_remaining_accounts_for_royalties(
            self,
            ledger,
            mint,
            PaymentCurrency::Token(*payment_mint),
            payer,
            buy_side_token_account,
            excluded_creators,
        )
        .await?;
        let (mint_metadata, _) = find_mint_metadata_address(mint);
        self.push(instruction::handle_payment_with_royalties(
            &address,
            payer_token_account,
            fee_collector_token_account,
            payment_token_account,
            payment_mint,
            mint,
            &mint_metadata,
            payer,
            payment_amount,
            remaining_accounts,
        ));
        Ok(address)
    }

    /// Buffers a native royalty settlement, assembling the trailing account
    /// list first. Native destinations are the wallets themselves, so no
    /// creation instructions are buffered.
    #[allow(clippy::too_many_arguments)]
    pub async fn with_handle_native_payment_with_royalties(
        &mut self,
        ledger: &dyn LedgerReader,
        name: &str,
        payment_amount: u64,
        mint: &Pubkey,
        fee_collector: &Pubkey,
        payment_target: &Pubkey,
        payer: &Pubkey,
        buy_side_receiver: Option<&Pubkey>,
        excluded_creators: &[Pubkey],
    ) -> Result<Pubkey, SdkError> {
        let (address, _) = find_payment_manager_address(name);
        let remaining_accounts = with_remaining_accounts_for_royalties(
            self,
            ledger,
            mint,
            PaymentCurrency::Native,
            payer,
            buy_side_receiver,
            excluded_creators,
        )
        .await?;
        let (mint_metadata, _) = find_mint_metadata_address(mint);
        self.push(instruction::handle_native_payment_with_royalties(
            &address,
            fee_collector,
            payment_target,
            payer,
            mint,
            &mint_metadata,
            payment_amount,
            remaining_accounts,
        ));
        Ok(address)
    }
}
