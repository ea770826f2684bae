//! # TextInput Component
//!
//! Single-line, inline text editor for the focused free-text field.
//!
//! ## Responsibilities
//!
//! - Capture typed characters and pastes (newlines are dropped)
//! - Handle editing (backspace, delete, left/right, home/end)
//! - Keep the cursor visible by scrolling horizontally
//!
//! The buffer mirrors the core answer for the focused field; the parent
//! pushes it back with `Action::SetAnswer` whenever `ContentChanged` fires.
//! The cursor is a byte offset that always sits on a char boundary.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the TextInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ContentChanged,
    CursorMoved,
}

pub struct TextInput {
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
    /// Whether to draw the terminal cursor (Prop)
    pub focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    /// Replace the buffer (on focus change) and park the cursor at the end.
    pub fn load(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    /// Slice of the buffer that fits in `width` columns with the cursor visible,
    /// and the cursor's column within that slice.
    fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }
        let before = &self.buffer[..self.cursor];
        // Leave one column for the cursor itself
        let mut start = 0;
        let mut cols = before.width();
        for (i, c) in before.char_indices() {
            if cols < width {
                break;
            }
            cols -= c.width().unwrap_or(0);
            start = i + c.len_utf8();
        }
        (&self.buffer[start..], cols as u16)
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (visible, cursor_col) = self.visible_window(area.width);
        let paragraph = Paragraph::new(visible.to_string()).style(Style::default().fg(Color::White));
        frame.render_widget(paragraph, area);
        if self.focused {
            frame.set_cursor_position((area.x + cursor_col, area.y));
        }
    }
}

impl EventHandler for TextInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::CursorMoved
            }),
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new();
        assert_eq!(input.handle_event(&TuiEvent::InputChar('a')), Some(InputEvent::ContentChanged));
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.load("héllo");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "hllo");
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "héllo");
        assert_eq!(input.cursor, 3);
        input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = TextInput::new();
        input.handle_event(&TuiEvent::Paste("ab\r\ncd\n".to_string()));
        assert_eq!(input.buffer, "abcd");
        assert_eq!(input.cursor, 4);
        assert_eq!(input.handle_event(&TuiEvent::Paste("\n".to_string())), None);
    }

    #[test]
    fn test_load_parks_cursor_at_end() {
        let mut input = TextInput::new();
        input.load("Thing");
        assert_eq!(input.cursor, 5);
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
    }

    #[test]
    fn test_window_scrolls_to_cursor() {
        let mut input = TextInput::new();
        input.load("abcdefghij");
        let (visible, col) = input.visible_window(4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);

        input.cursor = 0;
        let (visible, col) = input.visible_window(4);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_render_shows_text() {
        let backend = TestBackend::new(20, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = TextInput::new();
        input.load("abc");
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.starts_with("abc"));
    }
}
