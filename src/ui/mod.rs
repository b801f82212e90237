// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages and reports what the
//! application should know through an effect value.
//!
//! - [`search_bar`] - Live search field and result dropdown
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod search_bar;
pub mod theming;
