// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its lifecycle `Phase` and
//! the `Severity` enum.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity selects the icon and accent color of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    /// Also used for any category other than `success`.
    Error,
}

impl Severity {
    /// Maps a free-form category to a severity.
    ///
    /// Only the exact string `success` is a success; everything else gets
    /// the non-success presentation.
    #[must_use]
    pub fn parse(category: &str) -> Self {
        if category == "success" {
            Severity::Success
        } else {
            Severity::Error
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown before the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "!",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a toast is in its two-stage lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully shown, waiting for the display interval to end.
    Visible,
    /// Fading out since `since`; removed when the exit interval ends.
    Exiting { since: Instant },
}

/// A toast on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Shown verbatim.
    message: String,
    phase: Phase,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            phase: Phase::Visible,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Starts the exit animation. Returns `false` if it already started.
    pub fn begin_exit(&mut self, now: Instant) -> bool {
        if self.is_exiting() {
            return false;
        }
        self.phase = Phase::Exiting { since: now };
        true
    }

    /// Opacity at `now` for an exit animation lasting `exit`.
    ///
    /// 1.0 while visible, falling linearly to 0.0 over the exit interval.
    #[must_use]
    pub fn opacity(&self, now: Instant, exit: Duration) -> f32 {
        match self.phase {
            Phase::Visible => 1.0,
            Phase::Exiting { .. } if exit.is_zero() => 0.0,
            Phase::Exiting { since } => {
                let elapsed = now.saturating_duration_since(since);
                let progress = elapsed.as_secs_f32() / exit.as_secs_f32();
                (1.0 - progress).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Severity::Success, "Saved");
        let n2 = Notification::new(Severity::Success, "Saved");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_defaults_to_success() {
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn only_exact_success_is_success() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("warning"), Severity::Error);
        assert_eq!(Severity::parse("Success"), Severity::Error);
        assert_eq!(Severity::parse(""), Severity::Error);
    }

    #[test]
    fn severities_are_visually_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Success.icon(), Severity::Error.icon());
    }

    #[test]
    fn message_is_kept_verbatim() {
        let raw = "<b>Error:</b> Loan not found & closed";
        assert_eq!(Notification::new(Severity::Error, raw).message(), raw);
    }

    #[test]
    fn begin_exit_happens_once() {
        let mut notification = Notification::new(Severity::Success, "Book issued!");
        let now = Instant::now();

        assert!(notification.begin_exit(now));
        assert!(!notification.begin_exit(now + Duration::from_millis(50)));
        assert_eq!(notification.phase, Phase::Exiting { since: now });
    }

    #[test]
    fn opacity_fades_over_exit_interval() {
        let mut notification = Notification::new(Severity::Success, "Member added!");
        let start = Instant::now();
        let exit = Duration::from_millis(300);

        assert_eq!(notification.opacity(start, exit), 1.0);

        notification.begin_exit(start);
        let halfway = notification.opacity(start + Duration::from_millis(150), exit);
        assert!((halfway - 0.5).abs() < 0.01);
        assert_eq!(notification.opacity(start + Duration::from_millis(400), exit), 0.0);
    }

    #[test]
    fn zero_exit_interval_is_invisible_immediately() {
        let mut notification = Notification::new(Severity::Success, "Done");
        let now = Instant::now();
        notification.begin_exit(now);
        assert_eq!(notification.opacity(now, Duration::ZERO), 0.0);
    }
}
