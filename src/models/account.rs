//! Account models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::bank::models::AccountDto;

/// Backend primary key of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(AccountId)
    }
}

/// Maturity column: a date for CD accounts, a label ("n/a") for everything else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Maturity {
    Date(NaiveDate),
    Label(String),
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maturity::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Maturity::Label(label) => f.write_str(label),
        }
    }
}

/// One row of the account list
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub number: String,
    pub kind: String,
    pub balance: Decimal,
    pub maturity: Maturity,
}

impl Account {
    /// Path of the account detail page, which hosts the transaction list
    pub fn detail_path(&self) -> String {
        format!("/account/{}", self.id)
    }
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        Account {
            id: dto.id,
            number: dto.number,
            kind: dto.account_type,
            balance: dto.balance,
            maturity: dto.maturity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_parses_trimmed_input() {
        assert_eq!(" 42 ".parse::<AccountId>().unwrap(), AccountId(42));
        assert!("forty-two".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_maturity_accepts_date_or_label() {
        let date: Maturity = serde_json::from_str("\"2030-06-01\"").unwrap();
        assert_eq!(date, Maturity::Date(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()));
        assert_eq!(date.to_string(), "2030-06-01");

        let label: Maturity = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(label, Maturity::Label("n/a".to_string()));
        assert_eq!(label.to_string(), "n/a");
    }

    #[test]
    fn test_account_from_dto_keeps_every_field() {
        let dto = AccountDto {
            id: AccountId(7),
            number: "0000000007".to_string(),
            account_type: "Savings".to_string(),
            balance: Decimal::new(12_550, 2),
            maturity: Maturity::Label("n/a".to_string()),
        };

        let account = Account::from(dto);
        assert_eq!(account.id, AccountId(7));
        assert_eq!(account.number, "0000000007");
        assert_eq!(account.kind, "Savings");
        assert_eq!(account.balance.to_string(), "125.50");
        assert_eq!(account.detail_path(), "/account/7");
    }
}
