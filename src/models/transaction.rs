//! Transaction models

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::api::bank::models::TransactionDto;

/// One row of an account's transaction history
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub source: String,
    pub destination: String,
    pub amount: Decimal,
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Transaction {
            date: dto.date,
            description: dto.description,
            source: dto.source,
            destination: dto.dest,
            amount: dto.amount,
        }
    }
}
