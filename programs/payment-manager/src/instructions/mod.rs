#![allow(ambiguous_glob_reexports)]

pub mod close;
pub mod handle_native_payment_with_royalties;
pub mod handle_payment_with_royalties;
pub mod init;
pub mod manage_payment;
pub mod update;

pub use close::*;
pub use handle_native_payment_with_royalties::*;
pub use handle_payment_with_royalties::*;
pub use init::*;
pub use manage_payment::*;
pub use update::*;
