//! # Output Record
//!
//! Coercion of raw text answers into typed values. Runs once, when the
//! session completes.
//!
//! ```text
//! answers (key → raw text)  ──►  coerce per FieldType  ──►  OutputRecord
//! ```
//!
//! Empty answers are omitted. A malformed answer is a [`CoercionError`];
//! the caller decides what to do with it.

use std::collections::HashMap;

use log::debug;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::error::CoercionError;
use crate::core::field::{FieldSpec, FieldType, FormSpec};

/// A coerced answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Array(Vec<String>),
}

/// Coerce one raw, non-empty answer into the field's declared type.
pub fn coerce(field: &FieldSpec, raw: &str) -> Result<FieldValue, CoercionError> {
    match field.field_type {
        FieldType::String => Ok(FieldValue::String(raw.to_string())),
        FieldType::Boolean => match raw {
            "true" => Ok(FieldValue::Bool(true)),
            "false" => Ok(FieldValue::Bool(false)),
            _ => Err(CoercionError::InvalidBoolean {
                key: field.key.clone(),
                raw: raw.to_string(),
            }),
        },
        FieldType::Array => Ok(FieldValue::Array(
            raw.split(',').map(str::to_string).collect(),
        )),
        FieldType::Integer => raw
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| CoercionError::InvalidInteger {
                key: field.key.clone(),
                raw: raw.to_string(),
            }),
        FieldType::Object => Err(CoercionError::Unsupported {
            key: field.key.clone(),
            field_type: field.field_type,
        }),
    }
}

/// Typed answers in field declaration order.
///
/// Serializes as a JSON object whose key order matches the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRecord {
    entries: Vec<(String, FieldValue)>,
}

impl OutputRecord {
    /// Build the record from raw answers. Missing keys count as empty.
    pub fn build(
        spec: &FormSpec,
        answers: &HashMap<String, String>,
    ) -> Result<Self, CoercionError> {
        let mut entries = Vec::with_capacity(spec.len());
        for field in spec.fields() {
            let raw = answers.get(&field.key).map(String::as_str).unwrap_or("");
            debug!("Coercing {} ({}): {:?}", field.key, field.field_type, raw);
            if raw.is_empty() {
                continue;
            }
            let value = coerce(field, raw)?;
            entries.push((field.key.clone(), value));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for OutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
