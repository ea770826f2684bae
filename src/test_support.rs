//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{FormConfig, ResolvedConfig, resolve_with_env};
use crate::core::state::FormState;

/// A fresh session over the default "create a thing" form.
pub fn test_state() -> FormState {
    FormState::default()
}

/// Write a raw answer directly, bypassing focus.
pub fn fill(state: &mut FormState, key: &str, text: &str) {
    state.answers.insert(key.to_string(), text.to_string());
}

/// Config with every value at its default.
pub fn test_config() -> ResolvedConfig {
    resolve_with_env(&FormConfig::default(), |_| None)
}
