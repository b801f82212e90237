// SPDX-License-Identifier: MPL-2.0
//! JSON export of the diagnostics log.
//!
//! The report is written next to `settings.toml` when the user asks for it
//! (Ctrl+Shift+D). Event times are given as milliseconds before the export,
//! since the log only keeps monotonic timestamps.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use super::{DiagnosticEventKind, DiagnosticsLog};

/// File name of the report inside the config directory.
pub const REPORT_FILE: &str = "diagnostics.json";

/// Errors that can occur while writing a report.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
    /// No config directory could be resolved.
    NoDirectory,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::NoDirectory => write!(f, "no directory to write the report to"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::NoDirectory => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Snapshot of the log, oldest event first.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport<'a> {
    pub app_version: &'static str,
    /// Oldest events beyond this were dropped.
    pub capacity: usize,
    pub event_count: usize,
    pub failure_count: usize,
    pub events: Vec<ReportEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    /// Milliseconds between the event and the export.
    pub age_ms: u64,
    pub event: &'a DiagnosticEventKind,
}

impl DiagnosticReport<'_> {
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl DiagnosticsLog {
    /// Builds a report with event ages measured from `now`.
    #[must_use]
    pub fn report(&self, now: Instant) -> DiagnosticReport<'_> {
        let events = self
            .events()
            .map(|event| ReportEntry {
                age_ms: u64::try_from(now.saturating_duration_since(event.timestamp).as_millis())
                    .unwrap_or(u64::MAX),
                event: &event.kind,
            })
            .collect();

        DiagnosticReport {
            app_version: env!("CARGO_PKG_VERSION"),
            capacity: self.capacity(),
            event_count: self.len(),
            failure_count: self.failure_count(),
            events,
        }
    }

    /// Writes the report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the report cannot be serialized or written.
    pub fn export_to(&self, path: &Path, now: Instant) -> Result<(), ExportError> {
        let json = self.report(now).to_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(path, &json)?;
        Ok(())
    }
}

/// Writes to a sibling temporary file, then renames it over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
