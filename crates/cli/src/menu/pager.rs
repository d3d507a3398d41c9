//! Navigation state machine for the selection menu.
//!
//! Up and down never cross a page boundary: the cursor stays pinned to the
//! first or last row of the page until the user pages with left or right.

use log::debug;

use super::types::{NavEvent, NavigationState, SelectionResult, PAGE_SIZE};

/// Owns the entries and navigation state of one menu session.
#[derive(Debug)]
pub struct Pager<'a> {
    entries: &'a [String],
    state: NavigationState,
}

impl<'a> Pager<'a> {
    #[must_use]
    pub fn new(entries: &'a [String]) -> Self {
        Self {
            entries,
            state: NavigationState::new(entries.len()),
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Entries on the current page.
    #[must_use]
    pub fn page(&self) -> &'a [String] {
        let start = self.state.page_start.min(self.entries.len());
        let end = (start + PAGE_SIZE).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Applies one event, returning the session result once the user confirms
    /// or cancels.
    pub fn apply(&mut self, event: NavEvent) -> Option<SelectionResult> {
        let entry_count = self.entries.len();
        let state = &mut self.state;

        match event {
            NavEvent::MoveUp => {
                state.cursor = state.cursor.saturating_sub(1).max(state.page_start);
            }
            NavEvent::MoveDown => {
                state.cursor = (state.cursor + 1).min(state.page_end(entry_count));
            }
            NavEvent::NextPage => {
                if !state.at_last_page {
                    state.page_start += PAGE_SIZE;
                    state.cursor = state.page_start;
                }
            }
            NavEvent::PrevPage => {
                if state.page_start > 0 {
                    state.page_start -= PAGE_SIZE;
                    state.cursor = state.page_start;
                    state.at_last_page = false;
                }
            }
            NavEvent::Cancel => return Some(SelectionResult::Cancelled),
            NavEvent::Confirm => {
                if let Some(name) = self.entries.get(state.cursor) {
                    return Some(SelectionResult::Chosen(name.clone()));
                }
            }
            NavEvent::Ignored => {}
        }

        state.refresh_last_page(entry_count);
        debug!("{event:?} -> {state:?}");
        None
    }
}
