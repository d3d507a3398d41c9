//! Type definitions for the config selection menu.
//!
//! This module defines the navigation events the menu reacts to, the
//! navigation state it keeps while browsing, and the result of a session.

/// Number of entries shown on one page of the menu.
pub const PAGE_SIZE: usize = 10;

/// A single input to the selection menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavEvent {
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    Confirm,
    Cancel,
    /// Any key the menu has no binding for
    Ignored,
}

/// Represents the outcome of one menu session.
///
/// Exactly one result is produced per session; neither variant is an error.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SelectionResult {
    Chosen(String),
    Cancelled,
}

/// Paging and highlight state while the user is browsing.
///
/// `page_start` is always a multiple of [`PAGE_SIZE`] and `cursor` always
/// lies on the current page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavigationState {
    /// Index of the first entry on the current page
    pub page_start: usize,
    /// Absolute index of the highlighted entry
    pub cursor: usize,
    /// No entry exists at `page_start + PAGE_SIZE`
    pub at_last_page: bool,
}

impl NavigationState {
    #[must_use]
    pub fn new(entry_count: usize) -> Self {
        let mut state = Self {
            page_start: 0,
            cursor: 0,
            at_last_page: false,
        };
        state.refresh_last_page(entry_count);
        state
    }

    /// Recomputes `at_last_page` for the current page.
    pub fn refresh_last_page(&mut self, entry_count: usize) {
        self.at_last_page = self.page_start + PAGE_SIZE >= entry_count;
    }

    /// Index of the last entry that can be highlighted on the current page.
    #[must_use]
    pub fn page_end(&self, entry_count: usize) -> usize {
        (self.page_start + PAGE_SIZE - 1).min(entry_count.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new(3);
        assert_eq!(state.page_start, 0);
        assert_eq!(state.cursor, 0);
        assert!(state.at_last_page);
    }

    #[test]
    fn test_initial_state_with_several_pages() {
        let state = NavigationState::new(11);
        assert!(!state.at_last_page);
    }

    #[test]
    fn test_exactly_one_page_is_last() {
        let state = NavigationState::new(PAGE_SIZE);
        assert!(state.at_last_page);
    }

    #[test]
    fn test_page_end() {
        let mut state = NavigationState::new(25);
        assert_eq!(state.page_end(25), 9);

        state.page_start = 20;
        assert_eq!(state.page_end(25), 24);
    }

    #[test]
    fn test_selection_result_equality() {
        assert_eq!(
            SelectionResult::Chosen("a.cfg".to_string()),
            SelectionResult::Chosen("a.cfg".to_string())
        );
        assert_ne!(
            SelectionResult::Chosen("a.cfg".to_string()),
            SelectionResult::Cancelled
        );
    }
}
