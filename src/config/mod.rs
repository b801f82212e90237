// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[search]` - Lookup endpoint, debounce delay, timeout, race policy
//! - `[notifications]` - Toast timings and optional stack cap
//! - `[diagnostics]` - Diagnostic event buffer capacity
//!
//! Every key is optional; a missing key takes its default.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `LIBRIS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use libris::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//!
//! if warning.is_none() {
//!     println!("debounce: {} ms", config.search.debounce().value());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::{DebounceDelay, ToastTiming};
use crate::error::Result;
use crate::search::RacePolicy;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Fluent key of the toast shown when the settings file cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Live search settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Base URL of the lookup service.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Quiet period after the last keystroke (milliseconds).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: Option<u64>,

    /// HTTP request timeout (seconds).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,

    /// Which response wins when lookups overlap.
    #[serde(default)]
    pub race_policy: RacePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            race_policy: RacePolicy::default(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn debounce(&self) -> DebounceDelay {
        DebounceDelay::new(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Toast settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// How long a toast stays fully visible (milliseconds).
    #[serde(default = "default_display_ms")]
    pub display_ms: Option<u64>,

    /// Exit animation length (milliseconds).
    #[serde(default = "default_exit_ms")]
    pub exit_ms: Option<u64>,

    /// Maximum number of toasts on screen. Unset means unbounded.
    #[serde(default)]
    pub max_visible: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            exit_ms: default_exit_ms(),
            max_visible: None,
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        ToastTiming::new(
            self.display_ms.unwrap_or(DEFAULT_TOAST_DISPLAY_MS),
            self.exit_ms.unwrap_or(DEFAULT_TOAST_EXIT_MS),
        )
    }

    /// Stack cap; `Some(0)` is treated as unbounded.
    #[must_use]
    pub fn max_visible(&self) -> Option<usize> {
        self.max_visible.filter(|&n| n > 0)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity.unwrap_or(DEFAULT_BUFFER_CAPACITY))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_debounce_ms() -> Option<u64> {
    Some(DEFAULT_DEBOUNCE_MS)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_display_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DISPLAY_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_EXIT_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config and the Fluent key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "settings loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings ignored");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n\n\
             [search]\nendpoint = \"http://library.local/\"\nrace_policy = \"latest-issued\"\n\n\
             [notifications]\nmax_visible = 4\n",
        )
        .expect("failed to write settings");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.search.endpoint.as_deref(), Some("http://library.local/"));
        assert_eq!(loaded.search.race_policy, RacePolicy::LatestIssued);
        assert_eq!(loaded.notifications.max_visible(), Some(4));
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[search\nendpoint = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_take_defaults() {
        let config: Config = toml::from_str(
            "[search]\nendpoint = \"http://localhost:5000/\"\n\n[notifications]\nmax_visible = 3\n",
        )
        .expect("valid toml");

        assert_eq!(config.search.endpoint.as_deref(), Some("http://localhost:5000/"));
        assert_eq!(config.search.debounce().value(), DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.search.race_policy, RacePolicy::LastArrival);
        assert_eq!(config.notifications.max_visible(), Some(3));
        assert_eq!(config.notifications.timing(), ToastTiming::default());
        assert_eq!(config.diagnostics.capacity(), BufferCapacity::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            "[search]\ndebounce_ms = 999999\nrequest_timeout_secs = 0\n\n[diagnostics]\nbuffer_capacity = 1\n",
        )
        .expect("valid toml");

        assert_eq!(config.search.debounce().value(), 5_000);
        assert_eq!(
            config.search.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(config.diagnostics.capacity().value(), 10);
    }

    #[test]
    fn zero_max_visible_means_unbounded() {
        let config = NotificationsConfig {
            max_visible: Some(0),
            ..NotificationsConfig::default()
        };
        assert_eq!(config.max_visible(), None);
    }
}
