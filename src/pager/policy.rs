use std::str::FromStr;

use super::scroll::ScrollTrigger;

/// How a controller treats the rough edges of infinite scrolling.
///
/// `compatible()` keeps the behavior of the legacy web pages;
/// `hardened()` fixes it and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    pub scroll_trigger: ScrollTrigger,
    /// Stop requesting after the first empty page
    pub latch_exhausted: bool,
    /// Drop completions of requests that a newer request superseded
    pub discard_stale: bool,
    /// Clear the spinner when a request fails
    pub clear_busy_on_error: bool,
}

impl PagingPolicy {
    pub fn compatible() -> Self {
        PagingPolicy {
            scroll_trigger: ScrollTrigger::Exact,
            latch_exhausted: false,
            discard_stale: false,
            clear_busy_on_error: false,
        }
    }

    pub fn hardened() -> Self {
        PagingPolicy {
            scroll_trigger: ScrollTrigger::Threshold,
            latch_exhausted: true,
            discard_stale: true,
            clear_busy_on_error: true,
        }
    }

    pub fn with_scroll_trigger(mut self, scroll_trigger: ScrollTrigger) -> Self {
        self.scroll_trigger = scroll_trigger;
        self
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::hardened()
    }
}

/// Named policy presets accepted on the command line and in the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    Hardened,
    Compatible,
}

impl PagingMode {
    pub fn policy(self) -> PagingPolicy {
        match self {
            PagingMode::Hardened => PagingPolicy::hardened(),
            PagingMode::Compatible => PagingPolicy::compatible(),
        }
    }
}

impl FromStr for PagingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hardened" => Ok(PagingMode::Hardened),
            "compatible" | "compat" => Ok(PagingMode::Compatible),
            other => Err(format!("expected `hardened` or `compatible`, got `{}`", other)),
        }
    }
}
