use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Session-level (passed to core::update)
    Quit,
    Next,
    Prev,

    // Field-local (handled by the focused component)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    Resize,
}

/// Wait up to `timeout` for an event. `Ok(None)` on timeout or unmapped input.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Translate a key press into a `TuiEvent`.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => Some(TuiEvent::Quit),
        // Other control chords are not text
        (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => None,
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter | KeyCode::Tab | KeyCode::Down) => Some(TuiEvent::Next),
        (_, KeyCode::BackTab | KeyCode::Up) => Some(TuiEvent::Prev),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}
