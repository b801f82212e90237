// SPDX-License-Identifier: MPL-2.0
//! UI timing newtypes.
//!
//! Type-safe wrappers for the delays that drive the search field and the
//! toast stack, always within valid ranges.

use std::time::Duration;

// =============================================================================
// Timing Bounds
// =============================================================================

/// Debounce delay bounds in milliseconds.
pub mod debounce_bounds {
    /// Minimum debounce delay.
    pub const MIN_MS: u64 = 0;
    /// Maximum debounce delay.
    pub const MAX_MS: u64 = 5_000;
    /// Default debounce delay.
    pub const DEFAULT_MS: u64 = 300;
}

/// Toast timing bounds in milliseconds.
pub mod toast_bounds {
    /// Minimum time a toast stays fully visible.
    pub const MIN_DISPLAY_MS: u64 = 500;
    /// Maximum time a toast stays fully visible.
    pub const MAX_DISPLAY_MS: u64 = 60_000;
    /// Default time a toast stays fully visible.
    pub const DEFAULT_DISPLAY_MS: u64 = 3_000;
    /// Minimum exit animation length.
    pub const MIN_EXIT_MS: u64 = 0;
    /// Maximum exit animation length.
    pub const MAX_EXIT_MS: u64 = 2_000;
    /// Default exit animation length.
    pub const DEFAULT_EXIT_MS: u64 = 300;
}

// =============================================================================
// DebounceDelay
// =============================================================================

/// Quiet period after the last keystroke before a lookup fires.
///
/// # Example
///
/// ```
/// use libris::domain::ui::DebounceDelay;
///
/// assert_eq!(DebounceDelay::default().as_duration().as_millis(), 300);
/// assert_eq!(DebounceDelay::new(60_000).value(), 5_000); // clamped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceDelay(u64);

impl DebounceDelay {
    /// Creates a new delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(debounce_bounds::MIN_MS, debounce_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DebounceDelay {
    fn default() -> Self {
        Self(debounce_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// ToastTiming
// =============================================================================

/// Two-stage lifetime of a toast: fully visible, then fading out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    display_ms: u64,
    exit_ms: u64,
}

impl ToastTiming {
    /// Creates a timing from milliseconds, clamping each stage to its range.
    #[must_use]
    pub fn new(display_ms: u64, exit_ms: u64) -> Self {
        Self {
            display_ms: display_ms.clamp(
                toast_bounds::MIN_DISPLAY_MS,
                toast_bounds::MAX_DISPLAY_MS,
            ),
            exit_ms: exit_ms.clamp(toast_bounds::MIN_EXIT_MS, toast_bounds::MAX_EXIT_MS),
        }
    }

    /// How long the toast stays fully visible.
    #[must_use]
    pub fn display(self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    /// How long the exit animation runs before the toast is removed.
    #[must_use]
    pub fn exit(self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Total time from creation to removal.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        self.display() + self.exit()
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display_ms: toast_bounds::DEFAULT_DISPLAY_MS,
            exit_ms: toast_bounds::DEFAULT_EXIT_MS,
        }
    }
}
