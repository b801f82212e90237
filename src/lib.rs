// SPDX-License-Identifier: MPL-2.0
//! `libris` is a live book search built with the Iced GUI framework.
//!
//! Typing in the search field issues debounced lookups against a book
//! service and lists the matches in a dropdown; status messages appear as
//! toasts that fade out on their own. Strings are localized with Fluent and
//! preferences live in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/libris/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod search;
pub mod ui;
