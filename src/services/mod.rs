//! Page sources backed by the bank client, one per list view

pub mod account_service;
pub mod transaction_service;

pub use account_service::{account_list, AccountListController};
pub use transaction_service::{transaction_list, TransactionListController};
