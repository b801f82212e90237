// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and startup flags.

use crate::domain::flash::FlashMessage;
use crate::ui::notifications::NotificationMessage;
use crate::ui::search_bar;

/// Top-level messages consumed by [`super::App::update`]. Most variants
/// forward a component-specific message.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Notification(NotificationMessage),
    /// Ctrl+Shift+D: write the diagnostics report.
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LIBRIS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional lookup service base URL, overriding `[search] endpoint`.
    /// An empty string disables live search.
    pub endpoint: Option<String>,
    /// Status messages shown as toasts on startup, in order.
    pub flashes: Vec<FlashMessage>,
}
