//! Geometry of the selection menu frame.

use emubox_core::error::{Error, Result};

use super::types::PAGE_SIZE;

/// Columns reserved around the longest name for the index prefix and border.
const FRAME_MARGIN: usize = 13;

/// Rows reserved for the title, separator rule and border.
const ROW_MARGIN: usize = 5;

/// Largest entry number the index prefix column can hold.
pub const MAX_ENTRIES: usize = 9999;

/// Column at which every entry name starts.
pub const NAME_COLUMN: u16 = 7;

/// Size of the menu frame for one session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Geometry {
    pub visible_rows: usize,
    pub frame_width: usize,
    /// Sum of all name lengths; informational, not used for layout
    pub total_name_weight: usize,
}

/// Computes the frame geometry so the longest name and up to one page of
/// entries fit.
#[must_use]
pub fn compute_geometry(entries: &[String]) -> Geometry {
    let lengths = entries.iter().map(|name| name.chars().count());

    Geometry {
        visible_rows: entries.len().min(PAGE_SIZE) + ROW_MARGIN,
        frame_width: lengths.clone().max().unwrap_or(0) + FRAME_MARGIN,
        total_name_weight: lengths.sum(),
    }
}

/// Rejects entry sets too large for the four digit index prefix.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] with the first index that cannot be
/// numbered.
pub fn check_display_budget(entry_count: usize) -> Result<()> {
    if entry_count > MAX_ENTRIES {
        return Err(Error::IndexOutOfRange(MAX_ENTRIES));
    }
    Ok(())
}

/// Column where the `"{n}. "` prefix of the entry at `index` is drawn.
///
/// Wider numbers start further left so every name lines up at
/// [`NAME_COLUMN`].
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] for indexes numbered above 9999.
pub fn prefix_column(index: usize) -> Result<u16> {
    match index + 1 {
        1..=9 => Ok(4),
        10..=99 => Ok(3),
        100..=999 => Ok(2),
        1000..=MAX_ENTRIES => Ok(1),
        _ => Err(Error::IndexOutOfRange(index)),
    }
}
