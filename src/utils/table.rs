/// One table cell, optionally linking somewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub href: Option<String>,
}

impl Cell {
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell { text, href: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::from(text.to_string())
    }
}

/// A simple text-based table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table; cells past the last header are dropped
    pub fn add_row(&mut self, mut row: Vec<Cell>) {
        row.truncate(self.headers.len());

        for (i, cell) in row.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(cell.text.chars().count());
        }

        self.rows.push(row);
    }

    /// Render header, separator and rows, one line each.
    ///
    /// With `links` set, linked cells are wrapped in OSC 8 escapes and
    /// relative hrefs are joined onto that origin; the padding is computed
    /// from the visible text either way.
    pub fn render(&self, links: Option<&str>) -> String {
        let headers: Vec<Cell> = self.headers.iter().map(|h| Cell::from(h.as_str())).collect();

        let mut output = self.render_row(&headers, None);
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row, links));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[Cell], links: Option<&str>) -> String {
        let mut columns = Vec::with_capacity(self.col_widths.len());
        for (i, &width) in self.col_widths.iter().enumerate() {
            let column = match row.get(i) {
                Some(cell) => {
                    let padding = " ".repeat(width - cell.text.chars().count());
                    match (&cell.href, links) {
                        (Some(href), Some(base)) => format!("{}{}", osc8(&cell.text, &absolute(base, href)), padding),
                        _ => format!("{}{}", cell.text, padding),
                    }
                }
                None => " ".repeat(width),
            };
            columns.push(column);
        }
        columns.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

/// Terminals cannot resolve a relative href, so root it at the backend origin
fn absolute(base: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

fn osc8(text: &str, href: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", href, text)
}
