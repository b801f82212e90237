// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Bounds that are enforced by a newtype live next to that newtype in
//! [`crate::domain`]; they are re-exported here so callers have a single
//! place to look.
//!
//! # Categories
//!
//! - **Search**: Lookup endpoint, debounce delay, request timeout
//! - **Notifications**: Toast display and exit durations
//! - **Diagnostics**: Event buffer capacity

pub use crate::domain::diagnostics::buffer_capacity_bounds;
pub use crate::domain::ui::{debounce_bounds, toast_bounds};

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Lookup service used when neither the config file nor the CLI names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/";

/// Delay between the last keystroke and the lookup (milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = debounce_bounds::DEFAULT_MS;

/// Default HTTP request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays fully visible (milliseconds).
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = toast_bounds::DEFAULT_DISPLAY_MS;

/// Length of the exit animation (milliseconds).
pub const DEFAULT_TOAST_EXIT_MS: u64 = toast_bounds::DEFAULT_EXIT_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events kept in memory.
pub const DEFAULT_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_timeout_default_is_within_bounds() {
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn defaults_match_widget_timings() {
        assert_eq!(DEFAULT_DEBOUNCE_MS, 300);
        assert_eq!(DEFAULT_TOAST_DISPLAY_MS, 3000);
        assert_eq!(DEFAULT_TOAST_EXIT_MS, 300);
    }

    #[test]
    fn default_endpoint_is_a_directory_url() {
        assert!(DEFAULT_ENDPOINT.ends_with('/'));
    }
}
