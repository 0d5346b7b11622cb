use crate::pager::ScrollPosition;

/// The visible slice of a rendered list, measured in lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_y: u32,
    pub rows: u32,
}

impl Viewport {
    pub fn new(rows: u16) -> Self {
        Viewport {
            scroll_y: 0,
            rows: u32::from(rows),
        }
    }

    fn max_scroll(&self, document_height: u32) -> u32 {
        document_height.saturating_sub(self.rows)
    }

    /// Move by `delta` lines, clamped to the document
    pub fn scroll_by(&mut self, delta: i64, document_height: u32) {
        let target = i64::from(self.scroll_y) + delta;
        let max = i64::from(self.max_scroll(document_height));
        self.scroll_y = target.clamp(0, max) as u32;
    }

    pub fn to_top(&mut self) {
        self.scroll_y = 0;
    }

    pub fn to_bottom(&mut self, document_height: u32) {
        self.scroll_y = self.max_scroll(document_height);
    }

    /// Geometry handed to the scroll listener
    pub fn position(&self, document_height: u32) -> ScrollPosition {
        ScrollPosition::new(
            f64::from(self.scroll_y),
            f64::from(document_height),
            f64::from(self.rows),
        )
    }

    /// Lines currently on screen
    pub fn window<'a>(&self, lines: &'a [&'a str]) -> &'a [&'a str] {
        let start = (self.scroll_y as usize).min(lines.len());
        let end = (start + self.rows as usize).min(lines.len());
        &lines[start..end]
    }
}
