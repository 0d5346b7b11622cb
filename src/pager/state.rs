/// Everything a list view knows about its collection so far
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    /// A request is in flight (spinner row). Advisory only.
    pub busy: bool,
    /// Offset of the next page to request
    pub cursor: u32,
    /// Records in server order, append-only
    pub items: Vec<T>,
    /// An empty page has been seen
    pub exhausted: bool,
    generation: u64,
}

impl<T> PageState<T> {
    /// State of a freshly mounted view: busy, nothing loaded
    pub fn new() -> Self {
        PageState {
            busy: true,
            cursor: 0,
            items: Vec::new(),
            exhausted: false,
            generation: 0,
        }
    }

    /// Hand out the token for a new request; earlier tokens stop being current
    pub(crate) fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Append a page fetched at `start`
    pub(crate) fn append_page(&mut self, start: u32, page: Vec<T>, page_size: u32) {
        self.items.extend(page);
        self.cursor = start + page_size;
        self.busy = false;
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_busy_and_empty() {
        let state: PageState<u32> = PageState::new();
        assert!(state.busy);
        assert_eq!(state.cursor, 0);
        assert!(state.items.is_empty());
        assert!(!state.exhausted);
    }

    #[test]
    fn test_newer_token_supersedes_older() {
        let mut state: PageState<u32> = PageState::new();
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_append_page_keeps_existing_items_first() {
        let mut state = PageState::new();
        state.append_page(0, vec![1, 2], 20);
        state.append_page(20, vec![3], 20);
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.cursor, 40);
        assert!(!state.busy);
    }
}
