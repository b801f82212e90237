// SPDX-License-Identifier: MPL-2.0
//! In-memory log of recent search and notification events.
//!
//! Lookup failures are collapsed into one placeholder for the user; the
//! event log keeps the distinguishing details for troubleshooting. Every
//! recorded event is also emitted through `tracing`.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with bounded capacity
//! - [`DiagnosticEvent`]: Timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsLog`]: The buffer the application records into
//! - [`DiagnosticReport`]: JSON snapshot of the log, written on request

mod buffer;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
pub use export::{DiagnosticReport, ExportError, ReportEntry, REPORT_FILE};

/// Bounded store of the most recent diagnostic events.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
        }
    }

    /// Stores an event, dropping the oldest one when full.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        match &kind {
            DiagnosticEventKind::LookupFailed { seq, kind, message } => {
                tracing::warn!(seq, kind = %kind, message = %message, "lookup failed");
            }
            DiagnosticEventKind::Warning { message } => {
                tracing::warn!(message = %message, "warning");
            }
            other => tracing::trace!(event = ?other, "diagnostic event"),
        }
        self.events.push(DiagnosticEvent::new(kind));
    }

    /// Iterates oldest first.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recorded lookup failures still in the buffer.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::LookupFailed { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_bounded_by_capacity() {
        let mut log = DiagnosticsLog::new(BufferCapacity::new(10));
        for seq in 0..25 {
            log.record(DiagnosticEventKind::ResponseDiscarded { seq });
        }

        assert_eq!(log.len(), 10);
        let first = log.events().next().map(|event| event.kind.clone());
        assert_eq!(first, Some(DiagnosticEventKind::ResponseDiscarded { seq: 15 }));
    }

    #[test]
    fn failures_are_counted() {
        let mut log = DiagnosticsLog::default();
        log.record(DiagnosticEventKind::LookupIssued {
            seq: 0,
            trigger: "button".to_string(),
            query_len: 4,
        });
        log.record(DiagnosticEventKind::LookupFailed {
            seq: 0,
            kind: "transport".to_string(),
            message: "connection refused".to_string(),
        });

        assert_eq!(log.failure_count(), 1);
        assert!(matches!(
            log.events().next_back().map(|event| &event.kind),
            Some(DiagnosticEventKind::LookupFailed { .. })
        ));
    }
}
