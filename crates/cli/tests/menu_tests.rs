#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::fs;

    use emubox_cli::menu::{run_session, EventSource, NavEvent, SelectionResult};
    use emubox_core::error::{Error, Result};
    use emubox_core::store::ConfigStore;
    use tempfile::TempDir;

    /// Feeds a fixed list of events and fails if the menu asks for more.
    struct ScriptedEvents {
        events: VecDeque<NavEvent>,
    }

    impl ScriptedEvents {
        fn new(events: &[NavEvent]) -> Self {
            Self {
                events: events.iter().copied().collect(),
            }
        }
    }

    impl EventSource for ScriptedEvents {
        fn next_event(&mut self) -> Result<NavEvent> {
            self.events.pop_front().ok_or_else(|| {
                Error::RenderFailure(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "script exhausted",
                ))
            })
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{i:02}.cfg")).collect()
    }

    #[test]
    fn test_pick_second_entry_from_store() {
        let dir = TempDir::new().unwrap();
        for name in ["a.cfg", "z.cfg", "m.cfg"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let entries = ConfigStore::new(dir.path()).list_entries().unwrap();
        assert_eq!(entries, vec!["a.cfg", "m.cfg", "z.cfg"]);

        let mut events = ScriptedEvents::new(&[NavEvent::MoveDown, NavEvent::Confirm]);
        let mut out = Vec::new();
        let result = run_session(&entries, &mut events, &mut out).unwrap();

        assert_eq!(result, SelectionResult::Chosen("m.cfg".to_string()));
    }

    #[test]
    fn test_empty_store_draws_nothing() {
        let dir = TempDir::new().unwrap();
        let entries = ConfigStore::new(dir.path()).list_entries().unwrap();

        let mut events = ScriptedEvents::new(&[]);
        let mut out = Vec::new();
        let result = run_session(&entries, &mut events, &mut out);

        assert!(matches!(result, Err(Error::EmptySelection)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_too_many_entries_aborts_before_drawing() {
        let entries: Vec<String> = (0..10_000).map(|i| format!("{i:05}.cfg")).collect();

        let mut events = ScriptedEvents::new(&[NavEvent::Confirm]);
        let mut out = Vec::new();
        let result = run_session(&entries, &mut events, &mut out);

        assert!(matches!(result, Err(Error::IndexOutOfRange(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_cancel() {
        let entries = names(&["a.cfg", "b.cfg"]);
        let mut events = ScriptedEvents::new(&[NavEvent::MoveDown, NavEvent::Cancel]);
        let mut out = Vec::new();

        let result = run_session(&entries, &mut events, &mut out).unwrap();
        assert_eq!(result, SelectionResult::Cancelled);
    }

    #[test]
    fn test_paging_then_confirm() {
        let entries = numbered(25);
        let mut events = ScriptedEvents::new(&[
            NavEvent::NextPage,
            NavEvent::NextPage,
            NavEvent::NextPage, // no entry at index 30
            NavEvent::MoveDown,
            NavEvent::Confirm,
        ]);
        let mut out = Vec::new();

        let result = run_session(&entries, &mut events, &mut out).unwrap();
        assert_eq!(result, SelectionResult::Chosen("21.cfg".to_string()));
    }

    #[test]
    fn test_paging_back_then_confirm() {
        let entries = numbered(25);
        let mut events = ScriptedEvents::new(&[
            NavEvent::NextPage,
            NavEvent::MoveDown,
            NavEvent::PrevPage,
            NavEvent::PrevPage, // already on the first page
            NavEvent::Confirm,
        ]);
        let mut out = Vec::new();

        let result = run_session(&entries, &mut events, &mut out).unwrap();
        assert_eq!(result, SelectionResult::Chosen("00.cfg".to_string()));
    }

    #[test]
    fn test_down_does_not_leave_page() {
        let entries = numbered(25);
        let mut script = vec![NavEvent::MoveDown; 20];
        script.push(NavEvent::Confirm);

        let mut events = ScriptedEvents::new(&script);
        let mut out = Vec::new();

        let result = run_session(&entries, &mut events, &mut out).unwrap();
        assert_eq!(result, SelectionResult::Chosen("09.cfg".to_string()));
    }

    #[test]
    fn test_ignored_event_redraws_identically() {
        let entries = names(&["a.cfg", "m.cfg", "z.cfg"]);

        let mut plain_out = Vec::new();
        run_session(
            &entries,
            &mut ScriptedEvents::new(&[NavEvent::MoveDown, NavEvent::Cancel]),
            &mut plain_out,
        )
        .unwrap();

        let mut ignored_out = Vec::new();
        run_session(
            &entries,
            &mut ScriptedEvents::new(&[NavEvent::MoveDown, NavEvent::Ignored, NavEvent::Cancel]),
            &mut ignored_out,
        )
        .unwrap();

        // One extra frame, identical to the one before it
        let frame_count = 2;
        assert_eq!(plain_out.len() % frame_count, 0);
        let frame_len = plain_out.len() / frame_count;
        let second_frame = &plain_out[frame_len..];

        assert_eq!(ignored_out.len(), frame_len * 3);
        assert_eq!(&ignored_out[frame_len..frame_len * 2], second_frame);
        assert_eq!(&ignored_out[frame_len * 2..], second_frame);
    }

    #[test]
    fn test_input_error_ends_session() {
        let entries = names(&["a.cfg"]);
        let mut events = ScriptedEvents::new(&[NavEvent::MoveDown]);
        let mut out = Vec::new();

        let result = run_session(&entries, &mut events, &mut out);
        assert!(matches!(result, Err(Error::RenderFailure(_))));
    }
}
