// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::Serialize;

/// What happened.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A lookup request was sent.
    LookupIssued {
        seq: u64,
        /// `debounce` or `button`.
        trigger: String,
        query_len: usize,
    },

    /// A lookup failed and the error placeholder was shown.
    LookupFailed {
        seq: u64,
        /// `transport`, `status` or `payload`.
        kind: String,
        message: String,
    },

    /// A response was dropped by the race policy.
    ResponseDiscarded { seq: u64 },

    /// A toast was added to the stack.
    ToastShown { severity: String },

    /// A non-fatal problem outside the search flow.
    Warning { message: String },
}

/// A timestamped event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic capture time.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
