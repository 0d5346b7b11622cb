//! Typed records shown by the list views
//!
//! Each model is a plain projection of the matching wire DTO in
//! `api::bank::models`; nothing here validates or defaults fields.

pub mod account;
pub mod transaction;

pub use account::{Account, AccountId, Maturity};
pub use transaction::Transaction;
