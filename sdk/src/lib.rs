//! Off-chain client for the payment manager program.
//!
//! The crate assembles instructions; it does not talk to the network.
//! Everything that needs ledger state goes through the [`LedgerReader`]
//! trait, so callers plug in their own RPC client (or, in tests, an
//! in-memory map). Account-creation side effects accumulate in a
//! caller-owned [`TransactionBuffer`], in order, so a payment instruction's
//! trailing account list always refers to accounts that will exist by the
//! time it executes.

pub mod accounts;
pub mod builder;
pub mod error;
pub mod instruction;
pub mod ledger;
pub mod metadata;
pub mod pda;
pub mod transaction;

pub use error::SdkError;
pub use ledger::LedgerReader;
pub use transaction::TransactionBuffer;
