//! # Field Definitions
//!
//! The form is a fixed, ordered list of [`FieldSpec`]s held in a
//! [`FormSpec`]. The spec is built once at startup and handed to
//! [`FormState::new`](crate::core::state::FormState::new); nothing mutates it
//! afterwards.
//!
//! ```text
//! FormSpec
//! ├── key              (string,  required)
//! ├── name             (string,  required)
//! ├── description      (string)
//! ├── includeInSnippet (boolean)
//! └── done             (synthetic confirm, always last)
//! ```

use std::collections::HashSet;
use std::fmt;

/// Key of the synthetic confirmation field. Reserved: no `FieldSpec` may use it.
pub const CONFIRM_KEY: &str = "done";
pub const CONFIRM_TITLE: &str = "All done?";
pub const CONFIRM_AFFIRMATIVE: &str = "Yep";
pub const CONFIRM_NEGATIVE: &str = "Wait, no";

/// Options offered by a boolean selector, in display order.
pub const BOOLEAN_OPTIONS: [&str; 2] = ["true", "false"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Boolean,
    Array,
    Integer,
    Object,
}

impl FieldType {
    pub fn label(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Integer => "integer",
            FieldType::Object => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub required: bool,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, required: bool, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            required,
            field_type,
        }
    }

    /// Whether this field is presented as a selector rather than free text.
    pub fn is_choice(&self) -> bool {
        self.field_type == FieldType::Boolean
    }
}

#[derive(Debug)]
pub enum FormSpecError {
    DuplicateKey(String),
    ReservedKey(String),
}

impl fmt::Display for FormSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormSpecError::DuplicateKey(key) => write!(f, "duplicate field key: {key}"),
            FormSpecError::ReservedKey(key) => write!(f, "field key is reserved: {key}"),
        }
    }
}

impl std::error::Error for FormSpecError {}

/// Ordered, immutable list of the form's fields (the confirm is implicit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, FormSpecError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.key == CONFIRM_KEY {
                return Err(FormSpecError::ReservedKey(field.key.clone()));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(FormSpecError::DuplicateKey(field.key.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FormSpec {
    /// The "create a thing" form.
    fn default() -> Self {
        Self {
            fields: vec![
                FieldSpec::new("key", true, FieldType::String),
                FieldSpec::new("name", true, FieldType::String),
                FieldSpec::new("description", false, FieldType::String),
                FieldSpec::new("includeInSnippet", false, FieldType::Boolean),
            ],
        }
    }
}
