// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`LIBRIS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The CLI override should be initialized once at startup:
//! ```ignore
//! paths::init_cli_override(flags.config_dir.clone());
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Libris";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LIBRIS_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// On Linux this is `~/.config/Libris/` unless overridden.
/// Returns `None` if the platform has no config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/libris-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn platform_default_ends_with_app_name() {
        if std::env::var(ENV_CONFIG_DIR).is_ok() || get_cli_config_dir().is_some() {
            return;
        }
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
