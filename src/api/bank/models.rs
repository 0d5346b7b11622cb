use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AccountId, Maturity};

/// Account as returned by GET /account/get
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: AccountId,
    pub number: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: Decimal,
    pub maturity: Maturity,
}

/// Body of GET /account/get
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsResponse {
    pub accounts: Vec<AccountDto>,
}

/// Transaction as returned by GET /transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDto {
    pub date: NaiveDate,
    pub description: String,
    pub source: String,
    pub dest: String,
    pub amount: Decimal,
}

/// Body of GET /transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDto>,
}

/// Everything that can go wrong while fetching a page.
///
/// The variants only exist for logging; the list views report all of them
/// to the user the same way ("request failed").
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Base URL or header could not be turned into a request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Connection refused, timeout, TLS failure, ...
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Backend answered with a non-2xx status
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Body was not the JSON we expected (e.g. the login page after a redirect)
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_response_parses_django_payload() {
        let body = r#"{"accounts": [
            {"id": 3, "number": "0000000003", "type": "Checking", "balance": "1520.75", "maturity": "n/a"},
            {"id": 9, "number": "0000000009", "type": "12-Month CD", "balance": 5000, "maturity": "2031-01-15"}
        ]}"#;

        let response: AccountsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.accounts.len(), 2);
        assert_eq!(response.accounts[0].account_type, "Checking");
        assert_eq!(response.accounts[0].balance, Decimal::new(152_075, 2));
        assert_eq!(response.accounts[1].balance, Decimal::from(5000));
        assert_eq!(
            response.accounts[1].maturity,
            Maturity::Date(NaiveDate::from_ymd_opt(2031, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_transactions_response_parses_django_payload() {
        let body = r#"{"transactions": [
            {"date": "2024-03-02", "description": "Electronic Funds Transfer",
             "source": "0000000003", "dest": "0000000009", "amount": "25.00"},
            {"date": "2024-03-01", "description": "Maintenance Fee",
             "source": "0000000003", "dest": "None", "amount": "5.00"}
        ]}"#;

        let response: TransactionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.transactions.len(), 2);
        assert_eq!(response.transactions[1].dest, "None");
        assert_eq!(response.transactions[0].amount.to_string(), "25.00");
    }

    #[test]
    fn test_missing_collection_is_an_error() {
        assert!(serde_json::from_str::<AccountsResponse>(r#"{"transactions": []}"#).is_err());
    }
}
