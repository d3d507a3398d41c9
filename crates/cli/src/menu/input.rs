use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use emubox_core::error::Result;

use super::types::NavEvent;

/// A blocking source of navigation events.
pub trait EventSource {
    /// Waits for the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn next_event(&mut self) -> Result<NavEvent>;
}

/// Reads navigation events from the terminal.
///
/// Blocks until an event arrives; there is no timeout.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<NavEvent> {
        Ok(translate_event(&event::read()?))
    }
}

/// Maps a terminal event to a navigation event.
///
/// Resizes and other non-key events map to [`NavEvent::Ignored`], which makes
/// the menu redraw without changing state.
#[must_use]
pub fn translate_event(event: &Event) -> NavEvent {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        _ => NavEvent::Ignored,
    }
}

/// Maps a key press to a navigation event.
#[must_use]
pub fn translate_key(key_event: &KeyEvent) -> NavEvent {
    // Only presses; some platforms also report releases
    if key_event.kind != KeyEventKind::Press {
        return NavEvent::Ignored;
    }

    match key_event.code {
        KeyCode::Up => NavEvent::MoveUp,
        KeyCode::Down => NavEvent::MoveDown,
        KeyCode::Right => NavEvent::NextPage,
        KeyCode::Left => NavEvent::PrevPage,
        KeyCode::Enter => NavEvent::Confirm,
        KeyCode::Backspace => NavEvent::Cancel,
        // Raw mode swallows SIGINT
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            NavEvent::Cancel
        }
        _ => NavEvent::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(translate_key(&press(KeyCode::Up)), NavEvent::MoveUp);
        assert_eq!(translate_key(&press(KeyCode::Down)), NavEvent::MoveDown);
        assert_eq!(translate_key(&press(KeyCode::Right)), NavEvent::NextPage);
        assert_eq!(translate_key(&press(KeyCode::Left)), NavEvent::PrevPage);
    }

    #[test]
    fn test_confirm_and_cancel_keys() {
        assert_eq!(translate_key(&press(KeyCode::Enter)), NavEvent::Confirm);
        assert_eq!(translate_key(&press(KeyCode::Backspace)), NavEvent::Cancel);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(&ctrl_c), NavEvent::Cancel);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(translate_key(&press(KeyCode::Char('c'))), NavEvent::Ignored);
        assert_eq!(translate_key(&press(KeyCode::Char('q'))), NavEvent::Ignored);
        assert_eq!(translate_key(&press(KeyCode::Esc)), NavEvent::Ignored);
        assert_eq!(translate_key(&press(KeyCode::Tab)), NavEvent::Ignored);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_key(&release), NavEvent::Ignored);
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(translate_event(&Event::Resize(80, 24)), NavEvent::Ignored);
        assert_eq!(
            translate_event(&Event::Key(press(KeyCode::Down))),
            NavEvent::MoveDown
        );
    }
}
