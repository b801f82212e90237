// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{debounce_bounds, toast_bounds, DebounceDelay, ToastTiming};
