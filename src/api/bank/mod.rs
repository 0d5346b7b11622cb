pub mod client;
pub mod models;

pub use client::BankClient;
pub use models::ApiError;
