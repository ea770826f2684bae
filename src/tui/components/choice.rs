//! # Choice Component
//!
//! Inline single-choice selector. Used for boolean fields (`true` / `false`)
//! and for the final confirm (`Yep` / `Wait, no`).
//!
//! Left/Right (or `h`/`l`) move the highlight and wrap around. The option
//! labels are passed through untouched; the parent decides what a selection
//! means.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceEvent {
    Changed(usize),
}

pub struct ChoiceState {
    pub options: Vec<String>,
    pub selected: usize,
}

impl ChoiceState {
    pub fn new<S: Into<String>>(options: impl IntoIterator<Item = S>, selected: usize) -> Self {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let selected = selected.min(options.len().saturating_sub(1));
        Self { options, selected }
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Highlight the option with this label, if present.
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.options.iter().position(|o| o == label) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    fn step(&mut self, forward: bool) -> Option<ChoiceEvent> {
        let len = self.options.len();
        if len < 2 {
            return None;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
        Some(ChoiceEvent::Changed(self.selected))
    }
}

impl EventHandler for ChoiceState {
    type Event = ChoiceEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft | TuiEvent::InputChar('h') => self.step(false),
            TuiEvent::CursorRight | TuiEvent::InputChar('l') => self.step(true),
            _ => None,
        }
    }
}

/// Transient render wrapper, created each frame with borrowed state.
pub struct Choice<'a> {
    state: &'a ChoiceState,
    focused: bool,
}

impl<'a> Choice<'a> {
    pub fn new(state: &'a ChoiceState, focused: bool) -> Self {
        Self { state, focused }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.state.options.len() * 2);
        for (i, option) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == self.state.selected {
                theme::selected_option(self.focused)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {option} "), style));
        }
        Line::from(spans)
    }
}

impl Component for Choice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}
