//! # Configuration
//!
//! Presentation settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.thingform/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The field list itself is not configurable.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub max_width: Option<u16>,
    pub show_help: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "{Create} a {thing}";
pub const DEFAULT_MAX_WIDTH: u16 = 80;
pub const MIN_WIDTH: u16 = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub title: String,
    pub max_width: u16,
    pub show_help: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.thingform/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".thingform").join("config.toml"))
}

/// Load config from `~/.thingform/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FormConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FormConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FormConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FormConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<FormConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FormConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# thingform configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# title = "{Create} a {thing}"   # Or set THINGFORM_TITLE
# max_width = 80                 # Or set THINGFORM_MAX_WIDTH (minimum 20)
# show_help = true
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &FormConfig) -> ResolvedConfig {
    resolve_with_env(config, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], with the environment lookup supplied by the caller.
pub fn resolve_with_env(
    config: &FormConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: env → config → default
    let title = env("THINGFORM_TITLE")
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Width: env → config → default, never below MIN_WIDTH
    let max_width = env("THINGFORM_MAX_WIDTH")
        .and_then(|v| match v.trim().parse::<u16>() {
            Ok(width) => Some(width),
            Err(e) => {
                warn!("Ignoring THINGFORM_MAX_WIDTH={:?}: {}", v, e);
                None
            }
        })
        .or(config.general.max_width)
        .unwrap_or(DEFAULT_MAX_WIDTH)
        .max(MIN_WIDTH);

    ResolvedConfig {
        title,
        max_width,
        show_help: config.general.show_help.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&FormConfig::default(), no_env);
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert_eq!(resolved.max_width, DEFAULT_MAX_WIDTH);
        assert!(resolved.show_help);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FormConfig {
            general: GeneralConfig {
                title: Some("New widget".to_string()),
                max_width: Some(60),
                show_help: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(resolved.title, "New widget");
        assert_eq!(resolved.max_width, 60);
        assert!(!resolved.show_help);
    }

    #[test]
    fn test_resolve_env_wins_over_file() {
        let config = FormConfig {
            general: GeneralConfig {
                title: Some("From file".to_string()),
                max_width: Some(60),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, |name| match name {
            "THINGFORM_TITLE" => Some("From env".to_string()),
            "THINGFORM_MAX_WIDTH" => Some("72".to_string()),
            _ => None,
        });
        assert_eq!(resolved.title, "From env");
        assert_eq!(resolved.max_width, 72);
    }

    #[test]
    fn test_bad_env_width_falls_back_to_file() {
        let config = FormConfig {
            general: GeneralConfig {
                max_width: Some(50),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, |name| {
            (name == "THINGFORM_MAX_WIDTH").then(|| "wide".to_string())
        });
        assert_eq!(resolved.max_width, 50);
    }

    #[test]
    fn test_width_is_clamped_to_minimum() {
        let config = FormConfig {
            general: GeneralConfig {
                max_width: Some(3),
                ..Default::default()
            },
        };
        assert_eq!(resolve_with_env(&config, no_env).max_width, MIN_WIDTH);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: FormConfig = toml::from_str("[general]\nshow_help = false\n").unwrap();
        assert_eq!(config.general.show_help, Some(false));
        assert!(config.general.title.is_none());
        assert!(config.general.max_width.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: FormConfig = toml::from_str("").unwrap();
        assert!(config.general.title.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\ntitle = \"Make a gadget\"\nmax_width = 64").unwrap();
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.general.title.as_deref(), Some("Make a gadget"));
        assert_eq!(config.general.max_width, Some(64));
    }

    #[test]
    fn test_load_config_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nmax_width = \"wide\"").unwrap();
        assert!(matches!(
            load_config_from(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_generated_default_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert!(config.general.title.is_none());
        assert!(config.general.max_width.is_none());
    }
}
