use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use super::input::{EventSource, TerminalEvents};
use super::layout::{check_display_budget, compute_geometry, prefix_column, Geometry, NAME_COLUMN};
use super::pager::Pager;
use super::types::{NavigationState, SelectionResult};
use emubox_core::error::{Error, Result};

const TITLE: &str = "Select a config";

/// Row of the first entry, below the border, title and separator rule.
const FIRST_ENTRY_ROW: usize = 3;

/// Terminal state held for the length of a menu session.
///
/// Raw mode, the alternate screen and the hidden cursor are restored when
/// this is dropped, on every exit path.
struct TerminalSession;

impl TerminalSession {
    fn start() -> Result<Self> {
        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;

        // From here on the guard undoes whatever was acquired
        let session = TerminalSession;
        enable_raw_mode()?;
        stdout.execute(cursor::Hide)?;

        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Converts a frame coordinate to a terminal column or row.
fn to_cell(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::IndexOutOfRange(value))
}

fn horizontal_rule(width: usize, left: char, right: char) -> String {
    format!("{left}{}{right}", "─".repeat(width.saturating_sub(2)))
}

/// Draws the whole menu frame for the current page.
///
/// Nothing is diffed: the screen is cleared and every element redrawn, so the
/// same inputs always produce the same output.
///
/// # Errors
///
/// Returns [`Error::RenderFailure`] if writing fails, or
/// [`Error::IndexOutOfRange`] for an entry that cannot be numbered.
pub fn render<W: Write>(
    out: &mut W,
    page: &[String],
    state: &NavigationState,
    geometry: &Geometry,
) -> Result<()> {
    let width = geometry.frame_width;
    let right_column = to_cell(width.saturating_sub(1))?;
    let last_row = to_cell(geometry.visible_rows.saturating_sub(1))?;

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(horizontal_rule(width, '┌', '┐'))
    )?;

    for row in 1..last_row {
        queue!(
            out,
            MoveTo(0, row),
            Print('│'),
            MoveTo(right_column, row),
            Print('│')
        )?;
    }

    queue!(
        out,
        MoveTo(0, last_row),
        Print(horizontal_rule(width, '└', '┘')),
        MoveTo(2, 1),
        Print(TITLE),
        MoveTo(0, 2),
        Print(horizontal_rule(width, '├', '┤'))
    )?;

    for (offset, name) in page.iter().enumerate() {
        let index = state.page_start + offset;
        let row = to_cell(FIRST_ENTRY_ROW + offset)?;
        let column = prefix_column(index)?;
        let is_selected = index == state.cursor;

        if is_selected {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }

        queue!(
            out,
            MoveTo(column, row),
            Print(format!("{}. ", index + 1)),
            MoveTo(NAME_COLUMN, row),
            Print(name)
        )?;

        if is_selected {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
    }

    queue!(out, MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

fn check_entries(entries: &[String]) -> Result<()> {
    if entries.is_empty() {
        return Err(Error::EmptySelection);
    }
    check_display_budget(entries.len())
}

/// Runs the menu loop until the user confirms or cancels.
///
/// Each iteration draws the current page, blocks for one event and applies
/// it. No frame is drawn for an empty or oversized entry set.
///
/// # Errors
///
/// Returns [`Error::EmptySelection`] for an empty entry set,
/// [`Error::IndexOutOfRange`] when there are more entries than can be
/// numbered, and any render or input error.
pub fn run_session<E: EventSource, W: Write>(
    entries: &[String],
    events: &mut E,
    out: &mut W,
) -> Result<SelectionResult> {
    check_entries(entries)?;

    let geometry = compute_geometry(entries);
    debug!("Menu geometry: {geometry:?}");

    let mut pager = Pager::new(entries);

    loop {
        render(out, pager.page(), pager.state(), &geometry)?;

        if let Some(result) = pager.apply(events.next_event()?) {
            return Ok(result);
        }
    }
}

/// Prompts the user to choose a config from the list in the terminal.
///
/// # Errors
///
/// See [`run_session`]; the terminal is restored before any error returns.
pub fn prompt_for_entry(entries: &[String]) -> Result<SelectionResult> {
    check_entries(entries)?;

    let _session = TerminalSession::start()?;
    run_session(entries, &mut TerminalEvents, &mut stdout())
}
