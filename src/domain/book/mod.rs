// SPDX-License-Identifier: MPL-2.0
//! Book domain types.
//!
//! This module provides the records returned by the book lookup service:
//! - [`BookId`]: Opaque, stable identifier of a book
//! - [`SearchResult`]: One row of a search result set

mod types;

pub use types::{BookId, SearchResult};
