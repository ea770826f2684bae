//! # Actions
//!
//! Everything that can happen to a form session becomes an `Action`.
//! User types into a field? That's `Action::SetAnswer(text)`.
//! User says "Yep" at the end? That's `Action::Confirm(true)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an [`Effect`] telling the caller what to do
//! next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//!              Confirm(true), all valid
//! InProgress ─────────────────────────────► Completed
//!     │                                         │
//!     │ Quit                                    │ Quit
//!     ▼                                         ▼
//!  Aborted                                    (exit)
//! ```

use log::{debug, info, warn};

use crate::core::error::{FormError, ValidationError};
use crate::core::record::OutputRecord;
use crate::core::state::{Focus, FormState, Status};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the raw text of the focused field.
    SetAnswer(String),
    /// Validate the focused field and move forward.
    NextField,
    /// Move back one field without validating.
    PrevField,
    /// Answer the final "All done?" prompt.
    Confirm(bool),
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The session just completed; the record is in `state.status`.
    Completed,
    Quit,
}

pub fn update(state: &mut FormState, action: Action) -> Effect {
    if let Action::Quit = action {
        if state.is_in_progress() {
            info!("Form aborted at field {}", state.focus);
            state.status = Status::Aborted;
        }
        return Effect::Quit;
    }

    if !state.is_in_progress() {
        debug!("Ignoring {:?}: form is no longer in progress", action);
        return Effect::None;
    }

    match action {
        Action::SetAnswer(text) => {
            if let Focus::Field(field) = state.focused() {
                let key = field.key.clone();
                state.errors.retain(|e| e.key() != Some(key.as_str()));
                state.answers.insert(key, text);
            }
            Effect::None
        }
        Action::NextField => {
            let Focus::Field(field) = state.focused() else {
                return Effect::None;
            };
            match state.validate_field(field) {
                Ok(()) => {
                    state.errors.clear();
                    state.focus += 1;
                }
                Err(e) => {
                    debug!("Field {} rejected: {}", field.key, e);
                    state.errors = vec![e.into()];
                }
            }
            Effect::None
        }
        Action::PrevField => {
            state.errors.clear();
            state.focus = state.focus.saturating_sub(1);
            Effect::None
        }
        Action::Confirm(false) => {
            state.focus = state.confirm_index();
            state.errors = vec![ValidationError::NotConfirmed.into()];
            Effect::None
        }
        Action::Confirm(true) => submit(state),
        Action::Quit => Effect::Quit,
    }
}

/// Validate everything and, if clean, coerce the answers into the record.
fn submit(state: &mut FormState) -> Effect {
    let failures = state.validate_all();
    if let Some((first, _)) = failures.first() {
        state.focus = *first;
        state.errors = failures.into_iter().map(|(_, e)| e.into()).collect();
        debug!("Submit blocked by {} invalid field(s)", state.errors.len());
        return Effect::None;
    }

    match OutputRecord::build(&state.spec, &state.answers) {
        Ok(record) => {
            info!("Form completed with {} field(s)", record.len());
            state.errors.clear();
            state.status = Status::Completed(record);
            Effect::Completed
        }
        Err(e) => {
            warn!("Coercion failed: {}", e);
            if let Some(index) = state.spec.fields().iter().position(|f| f.key == e.key()) {
                state.focus = index;
            }
            state.errors = vec![FormError::Coercion(e)];
            Effect::None
        }
    }
}
