//! Interactive config selection menu.
//!
//! This module provides the terminal-based selection menu for emubox: a
//! framed, paginated list of configs that resolves to the chosen name.
//!
//! # Key Features
//!
//! - **Paged List**: Ten configs per page, numbered from 1
//! - **Keyboard Navigation**: Arrow keys move and page
//! - **Full Redraw**: Every state change redraws the whole frame
//!
//! # User Interface
//!
//! The interface supports:
//! - Up/Down to move within the page
//! - Right/Left for the next and previous page
//! - Enter to select a config
//! - Backspace or Ctrl-C to quit

// Export public items from submodules
pub mod input;
pub mod layout;
pub mod pager;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::{EventSource, TerminalEvents};
pub use types::{NavEvent, NavigationState, SelectionResult, PAGE_SIZE};
pub use ui::{prompt_for_entry, run_session};

use emubox_core::error::Result;
use emubox_core::store::ConfigStore;

/// Lists the store and lets the user pick one config from it.
///
/// # Errors
///
/// Returns an error if the store cannot be read, holds no configs, or the
/// menu fails.
pub fn select_entry(store: &ConfigStore) -> Result<SelectionResult> {
    let entries = store.list_entries()?;
    prompt_for_entry(&entries)
}
