// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`book`]: Lookup records ([`SearchResult`](book::SearchResult), [`BookId`](book::BookId))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`flash`]: Server-side status messages ([`FlashMessage`](flash::FlashMessage))
//! - [`ui`]: UI timing values ([`DebounceDelay`](ui::DebounceDelay),
//!   [`ToastTiming`](ui::ToastTiming))

pub mod book;
pub mod diagnostics;
pub mod flash;
pub mod ui;
