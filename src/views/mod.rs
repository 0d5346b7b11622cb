//! Text rendering of the list views

pub mod account;
pub mod transaction;

use crate::pager::PageState;
use crate::utils::table::{Cell, Table};

/// A record that renders as one fixed-column row
pub trait ListRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

/// Spinner row shown while a request is in flight
pub fn busy_indicator(visible: bool) -> &'static str {
    if visible {
        "Loading...\n"
    } else {
        ""
    }
}

/// Render header, every loaded record, and the busy indicator.
///
/// With `links` set, row links become terminal hyperlinks rooted at that origin.
pub fn render_list<T: ListRow>(state: &PageState<T>, links: Option<&str>) -> String {
    let mut table = Table::new(T::HEADERS);
    for item in &state.items {
        table.add_row(item.cells());
    }

    let mut output = table.render(links);
    output.push_str(busy_indicator(state.busy));
    output
}

/// Currency amounts are shown with a dollar sign, as the bank pages do
pub(crate) fn dollars(amount: &rust_decimal::Decimal) -> String {
    format!("${}", amount)
}
