/// Vertical geometry of the list at the moment a scroll event fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollPosition {
    pub fn new(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        ScrollPosition {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    /// Largest scroll offset the document allows
    pub fn bottom(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// When a scroll event counts as "reached the bottom"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTrigger {
    /// Offset must equal the bottom exactly; fractional layouts never match
    Exact,
    /// Offset at or past the bottom
    Threshold,
}

impl ScrollTrigger {
    #[allow(clippy::float_cmp)]
    pub fn is_at_bottom(self, position: ScrollPosition) -> bool {
        match self {
            ScrollTrigger::Exact => position.scroll_y == position.bottom(),
            ScrollTrigger::Threshold => position.scroll_y >= position.bottom(),
        }
    }
}

impl std::str::FromStr for ScrollTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(ScrollTrigger::Exact),
            "threshold" => Ok(ScrollTrigger::Threshold),
            other => Err(format!("expected `exact` or `threshold`, got `{}`", other)),
        }
    }
}
