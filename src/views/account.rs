use super::{dollars, ListRow};
use crate::models::Account;
use crate::utils::table::Cell;

impl ListRow for Account {
    const HEADERS: &'static [&'static str] = &["No.", "Type", "Balance", "Maturity"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::link(self.number.clone(), self.detail_path()),
            self.kind.as_str().into(),
            dollars(&self.balance).into(),
            self.maturity.to_string().into(),
        ]
    }
}
