// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component effects are turned into diagnostic events here; the components
//! themselves only log through `tracing`.

use super::Message;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsLog, ExportError};
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notifier, Severity};
use crate::ui::search_bar::{self, Effect};
use iced::Task;
use std::path::Path;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub search: &'a mut search_bar::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsLog,
}

/// Toasts raised through the context are recorded in the diagnostics log.
impl Notifier for UpdateContext<'_> {
    type Message = Message;

    fn notify(&mut self, message: String, severity: Severity) -> Task<Message> {
        self.diagnostics.record(DiagnosticEventKind::ToastShown {
            severity: severity.as_str().to_string(),
        });
        self.notifications
            .notify(message, severity)
            .map(Message::Notification)
    }
}

/// Handles search bar messages.
pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search_bar::Message,
) -> Task<Message> {
    let (effect, task) = ctx.search.handle_message(message);
    record_effect(ctx.diagnostics, effect);
    task.map(Message::SearchBar)
}

fn record_effect(diagnostics: &mut DiagnosticsLog, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::LookupIssued(request) => {
            diagnostics.record(DiagnosticEventKind::LookupIssued {
                seq: request.seq.value(),
                trigger: request.trigger.as_str().to_string(),
                query_len: request.query.chars().count(),
            });
        }
        Effect::LookupFailed { seq, error } => {
            diagnostics.record(DiagnosticEventKind::LookupFailed {
                seq: seq.value(),
                kind: error.kind().to_string(),
                message: error.to_string(),
            });
        }
        Effect::ResponseDiscarded(seq) => {
            diagnostics.record(DiagnosticEventKind::ResponseDiscarded { seq: seq.value() });
        }
        Effect::Selected(book) => {
            tracing::debug!(book = %book.id(), "result selected");
        }
    }
}

/// Handles toast timer and animation messages.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications
        .handle_message(message)
        .map(Message::Notification)
}

/// Writes the diagnostics report to `path` and returns the toast to show.
pub fn export_diagnostics(
    diagnostics: &DiagnosticsLog,
    path: Option<&Path>,
    i18n: &I18n,
) -> (String, Severity) {
    let result = path
        .ok_or(ExportError::NoDirectory)
        .and_then(|path| diagnostics.export_to(path, Instant::now()).map(|()| path));

    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), events = diagnostics.len(), "diagnostics exported");
            (i18n.tr("notification-diagnostics-exported"), Severity::Success)
        }
        Err(err) => {
            tracing::warn!(error = %err, "diagnostics export failed");
            (i18n.tr("notification-diagnostics-export-error"), Severity::Error)
        }
    }
}
