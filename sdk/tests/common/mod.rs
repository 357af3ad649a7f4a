#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::{AnchorSerialize, Discriminator};
use async_trait::async_trait;
use borsh::BorshSerialize;
use mpl_token_metadata::accounts::Metadata;
use mpl_token_metadata::types::{Creator, Key};
use payment_manager::state::PaymentManager;
use payment_manager_sdk::{LedgerReader, SdkError};
use spl_token::state::{Account as TokenAccountState, AccountState};

/// In-memory ledger for driving the builders without a network.
#[derive(Default)]
pub struct MockLedger {
    accounts: HashMap<Pubkey, Vec<u8>>,
    largest_token_accounts: HashMap<Pubkey, Pubkey>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_account(&mut self, address: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, data);
    }

    pub fn insert_largest_token_account(&mut self, mint: Pubkey, token_account: Pubkey) {
        self.largest_token_accounts.insert(mint, token_account);
    }
}

#[async_trait]
impl LedgerReader for MockLedger {
    async fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, SdkError> {
        Ok(self.accounts.get(address).cloned())
    }

    async fn largest_token_account(&self, mint: &Pubkey) -> Result<Option<Pubkey>, SdkError> {
        Ok(self.largest_token_accounts.get(mint).copied())
    }
}

/// Serialized metadata account referencing `mint` with the given royalty
/// table.
pub fn metadata_account_data(
    mint: &Pubkey,
    seller_fee_basis_points: u16,
    creators: &[(Pubkey, u8)],
) -> Vec<u8> {
    let metadata = Metadata {
        key: Key::MetadataV1,
        update_authority: Pubkey::new_unique(),
        mint: *mint,
        name: "Test Token".to_string(),
        symbol: "TEST".to_string(),
        uri: "https://example.com/test.json".to_string(),
        seller_fee_basis_points,
        creators: Some(
            creators
                .iter()
                .map(|(address, share)| Creator {
                    address: *address,
                    verified: false,
                    share: *share,
                })
                .collect(),
        ),
        primary_sale_happened: false,
        is_mutable: true,
        edition_nonce: None,
        token_standard: None,
        collection: None,
        uses: None,
        collection_details: None,
        programmable_config: None,
    };
    metadata.try_to_vec().unwrap()
}

/// Packed SPL token account data.
pub fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let state = TokenAccountState {
        mint: *mint,
        owner: *owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; TokenAccountState::LEN];
    TokenAccountState::pack(state, &mut data).unwrap();
    data
}

/// Serialized payment manager record, discriminator included.
pub fn payment_manager_account_data(record: &PaymentManager) -> Vec<u8> {
    let mut data = PaymentManager::DISCRIMINATOR.to_vec();
    record.serialize(&mut data).unwrap();
    data
}

pub fn payment_manager_record(name: &str, fee_collector: Pubkey) -> PaymentManager {
    PaymentManager {
        bump: 255,
        name: name.to_string(),
        authority: Pubkey::new_unique(),
        fee_collector,
        maker_fee_basis_points: 500,
        taker_fee_basis_points: 300,
        include_seller_fee_basis_points: true,
        royalty_fee_share: Some(4500),
    }
}
