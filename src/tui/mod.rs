//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ──► TuiEvent ──► dispatch() ──► focused component
//!                                │                │
//!                                ▼                ▼
//!                          core::update ◄── SetAnswer(text)
//! ```
//!
//! The loop is single-threaded: one event is fully dispatched before the next
//! is read, and the frame is redrawn only after something happened.

mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::field::{BOOLEAN_OPTIONS, CONFIRM_AFFIRMATIVE, CONFIRM_NEGATIVE, FormSpec};
use crate::core::record::OutputRecord;
use crate::core::state::{Focus, FormState};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChoiceState, InputEvent, TextInput};
use crate::tui::event::{TuiEvent, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the form session)
pub struct TuiState {
    pub text_input: TextInput,
    /// Selector for the focused boolean field
    pub choice: ChoiceState,
    /// Selector for the final confirm; starts on the negative option
    pub confirm: ChoiceState,
    pub title: String,
    pub max_width: u16,
    pub show_help: bool,
    synced_focus: Option<usize>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            text_input: TextInput::new(),
            choice: ChoiceState::new(BOOLEAN_OPTIONS, 0),
            confirm: ChoiceState::new([CONFIRM_AFFIRMATIVE, CONFIRM_NEGATIVE], 1),
            title: config.title.clone(),
            max_width: config.max_width,
            show_help: config.show_help,
            synced_focus: None,
        }
    }

    /// Reload the focused component from the session when focus has moved.
    pub fn sync(&mut self, state: &FormState) {
        if self.synced_focus == Some(state.focus) {
            return;
        }
        self.synced_focus = Some(state.focus);
        match state.focused() {
            Focus::Field(field) if field.is_choice() => {
                self.choice = ChoiceState::new(BOOLEAN_OPTIONS, 0);
                self.choice.select_label(state.answer(&field.key));
            }
            Focus::Field(field) => self.text_input.load(state.answer(&field.key)),
            Focus::Confirm => {}
        }
    }
}

#[derive(Clone, Copy)]
enum FocusKind {
    Text,
    Choice,
    Confirm,
}

/// Route one event to the focused component and the session.
pub fn dispatch(state: &mut FormState, tui: &mut TuiState, event: TuiEvent) -> Effect {
    tui.sync(state);

    let effect = if matches!(event, TuiEvent::Quit) {
        update(state, Action::Quit)
    } else if matches!(event, TuiEvent::Resize) {
        Effect::None
    } else if !state.is_in_progress() {
        // Only the status panel is showing; `q` also leaves
        match event {
            TuiEvent::InputChar('q') => update(state, Action::Quit),
            _ => Effect::None,
        }
    } else {
        let kind = match state.focused() {
            Focus::Field(field) if field.is_choice() => FocusKind::Choice,
            Focus::Field(_) => FocusKind::Text,
            Focus::Confirm => FocusKind::Confirm,
        };
        match kind {
            FocusKind::Text => dispatch_text(state, tui, event),
            FocusKind::Choice => dispatch_choice(state, tui, event),
            FocusKind::Confirm => dispatch_confirm(state, tui, event),
        }
    };

    tui.sync(state);
    effect
}

fn dispatch_text(state: &mut FormState, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Next => update(state, Action::NextField),
        TuiEvent::Prev => update(state, Action::PrevField),
        _ => match tui.text_input.handle_event(&event) {
            Some(InputEvent::ContentChanged) => {
                update(state, Action::SetAnswer(tui.text_input.buffer.clone()))
            }
            _ => Effect::None,
        },
    }
}

fn dispatch_choice(state: &mut FormState, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Next => {
            update(state, Action::SetAnswer(tui.choice.selected_label().to_string()));
            update(state, Action::NextField)
        }
        TuiEvent::Prev => update(state, Action::PrevField),
        _ => match tui.choice.handle_event(&event) {
            Some(_) => update(state, Action::SetAnswer(tui.choice.selected_label().to_string())),
            None => Effect::None,
        },
    }
}

fn dispatch_confirm(state: &mut FormState, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Next => update(state, Action::Confirm(tui.confirm.selected == 0)),
        TuiEvent::Prev => update(state, Action::PrevField),
        TuiEvent::InputChar('y' | 'Y') => {
            tui.confirm.selected = 0;
            update(state, Action::Confirm(true))
        }
        TuiEvent::InputChar('n' | 'N') => {
            tui.confirm.selected = 1;
            update(state, Action::Confirm(false))
        }
        _ => {
            tui.confirm.handle_event(&event);
            Effect::None
        }
    }
}

/// Restores the terminal on every exit path, including `?` returns.
struct TerminalModeGuard;

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
    }
}

/// Run the form until the user completes it or quits.
///
/// Returns the record if the session completed, `None` if it was aborted.
pub fn run(config: &ResolvedConfig) -> io::Result<Option<OutputRecord>> {
    let mut state = FormState::new(FormSpec::default());
    let mut tui = TuiState::new(config);
    tui.sync(&state);

    let _terminal_mode_guard = TerminalModeGuard;
    let mut terminal = ratatui::try_init()?;
    execute!(stdout(), EnableBracketedPaste)?;
    info!("Terminal initialized (alternate screen, bracketed paste)");

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state, &mut tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;
        debug!("Dispatching {:?} (focus {})", event, state.focus);

        match dispatch(&mut state, &mut tui, event) {
            Effect::Quit => break,
            Effect::Completed => {
                info!("Session completed");
            }
            Effect::None => {}
        }
    }

    Ok(state.record().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::FieldValue;
    use crate::core::state::Status;
    use crate::test_support::{test_config, test_state};

    fn type_text(state: &mut FormState, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch(state, tui, TuiEvent::InputChar(c));
        }
    }

    fn setup() -> (FormState, TuiState) {
        let state = test_state();
        let mut tui = TuiState::new(&test_config());
        tui.sync(&state);
        (state, tui)
    }

    #[test]
    fn test_typing_updates_answer() {
        let (mut state, mut tui) = setup();
        type_text(&mut state, &mut tui, "abq");
        assert_eq!(state.answer("key"), "abq");
        assert!(state.is_in_progress());
    }

    #[test]
    fn test_full_walkthrough_with_keys() {
        let (mut state, mut tui) = setup();
        type_text(&mut state, &mut tui, "abc");
        dispatch(&mut state, &mut tui, TuiEvent::Next);
        type_text(&mut state, &mut tui, "Thing");
        dispatch(&mut state, &mut tui, TuiEvent::Next);
        dispatch(&mut state, &mut tui, TuiEvent::Next); // description left empty
        dispatch(&mut state, &mut tui, TuiEvent::Next); // includeInSnippet keeps "true"
        assert_eq!(state.focused(), Focus::Confirm);

        // Confirm starts on "Wait, no"
        assert_eq!(dispatch(&mut state, &mut tui, TuiEvent::Next), Effect::None);
        assert_eq!(state.error_summary(), "Welp, finish up then");

        dispatch(&mut state, &mut tui, TuiEvent::CursorLeft);
        assert_eq!(dispatch(&mut state, &mut tui, TuiEvent::Next), Effect::Completed);
        let record = state.record().unwrap();
        assert_eq!(record.get("includeInSnippet"), Some(&FieldValue::Bool(true)));
        assert!(!record.contains_key("description"));
    }

    #[test]
    fn test_choice_toggle_commits_answer() {
        let (mut state, mut tui) = setup();
        state.focus = 3;
        dispatch(&mut state, &mut tui, TuiEvent::CursorRight);
        assert_eq!(state.answer("includeInSnippet"), "false");
    }

    #[test]
    fn test_going_back_reloads_text() {
        let (mut state, mut tui) = setup();
        type_text(&mut state, &mut tui, "abc");
        dispatch(&mut state, &mut tui, TuiEvent::Next);
        assert_eq!(tui.text_input.buffer, "");
        dispatch(&mut state, &mut tui, TuiEvent::Prev);
        assert_eq!(tui.text_input.buffer, "abc");
        dispatch(&mut state, &mut tui, TuiEvent::Backspace);
        assert_eq!(state.answer("key"), "ab");
    }

    #[test]
    fn test_y_key_confirms() {
        let (mut state, mut tui) = setup();
        crate::test_support::fill(&mut state, "key", "abc");
        crate::test_support::fill(&mut state, "name", "Thing");
        state.focus = state.confirm_index();
        assert_eq!(dispatch(&mut state, &mut tui, TuiEvent::InputChar('y')), Effect::Completed);
    }

    #[test]
    fn test_quit_mid_form() {
        let (mut state, mut tui) = setup();
        type_text(&mut state, &mut tui, "abc");
        assert_eq!(dispatch(&mut state, &mut tui, TuiEvent::Quit), Effect::Quit);
        assert_eq!(state.status, Status::Aborted);
        assert!(state.record().is_none());
    }

    #[test]
    fn test_q_leaves_completed_form() {
        let (mut state, mut tui) = setup();
        crate::test_support::fill(&mut state, "key", "abc");
        crate::test_support::fill(&mut state, "name", "Thing");
        state.focus = state.confirm_index();
        dispatch(&mut state, &mut tui, TuiEvent::InputChar('y'));
        assert_eq!(dispatch(&mut state, &mut tui, TuiEvent::InputChar('x')), Effect::None);
        assert_eq!(dispatch(&mut state, &mut tui, TuiEvent::InputChar('q')), Effect::Quit);
        assert!(state.record().is_some());
    }
}
