use super::{dollars, ListRow};
use crate::models::Transaction;
use crate::utils::table::Cell;

impl ListRow for Transaction {
    const HEADERS: &'static [&'static str] = &["Date", "Desc.", "Source", "Dest.", "Amount"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.date.format("%Y-%m-%d").to_string().into(),
            self.description.as_str().into(),
            self.source.as_str().into(),
            self.destination.as_str().into(),
            dollars(&self.amount).into(),
        ]
    }
}
