//! # Form State
//!
//! Everything one form session knows. No terminal types here;
//! presentation state (cursor position, highlighted option) lives in `tui`.
//!
//! ```text
//! FormState
//! ├── spec: FormSpec                   // fixed field list
//! ├── focus: usize                     // 0..=spec.len(), spec.len() = confirm
//! ├── answers: HashMap<String, String> // raw text per key, empty until entered
//! ├── errors: Vec<FormError>           // current error set
//! └── status: Status                   // InProgress | Completed | Aborted
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;

use crate::core::error::{FormError, ValidationError};
use crate::core::field::{FieldSpec, FormSpec};
use crate::core::record::OutputRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    InProgress,
    /// Terminal. Holds the record produced on completion.
    Completed(OutputRecord),
    /// Terminal. The user quit; nothing is kept.
    Aborted,
}

/// What currently has focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus<'a> {
    Field(&'a FieldSpec),
    Confirm,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub spec: FormSpec,
    pub focus: usize,
    pub answers: HashMap<String, String>,
    pub errors: Vec<FormError>,
    pub status: Status,
}

impl FormState {
    pub fn new(spec: FormSpec) -> Self {
        let answers = spec
            .fields()
            .iter()
            .map(|f| (f.key.clone(), String::new()))
            .collect();
        Self {
            spec,
            focus: 0,
            answers,
            errors: Vec::new(),
            status: Status::InProgress,
        }
    }

    pub fn focused(&self) -> Focus<'_> {
        match self.spec.get(self.focus) {
            Some(field) => Focus::Field(field),
            None => Focus::Confirm,
        }
    }

    /// Index of the synthetic confirm field.
    pub fn confirm_index(&self) -> usize {
        self.spec.len()
    }

    /// Raw answer for `key`, empty if nothing was entered.
    pub fn answer(&self, key: &str) -> &str {
        self.answers.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == Status::InProgress
    }

    pub fn record(&self) -> Option<&OutputRecord> {
        match &self.status {
            Status::Completed(record) => Some(record),
            _ => None,
        }
    }

    /// Validate a single field against its current answer.
    pub fn validate_field(&self, field: &FieldSpec) -> Result<(), ValidationError> {
        if field.required && self.answer(&field.key).is_empty() {
            return Err(ValidationError::Required {
                key: field.key.clone(),
            });
        }
        Ok(())
    }

    /// Validate every field in order, returning `(index, error)` for each failure.
    pub fn validate_all(&self) -> Vec<(usize, ValidationError)> {
        self.spec
            .fields()
            .iter()
            .enumerate()
            .filter_map(|(i, field)| self.validate_field(field).err().map(|e| (i, e)))
            .collect()
    }

    /// Concatenated error messages for the error banner.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormSpec::default())
    }
}
