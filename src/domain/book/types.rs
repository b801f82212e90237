// SPDX-License-Identifier: MPL-2.0
//! Book record types.

use std::fmt;

/// Opaque identifier of a book.
///
/// The lookup service may send it as a number or a string; both are kept in
/// their textual form since the identifier is only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    /// Creates an identifier from its textual form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// A book matching a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    id: BookId,
    title: String,
    code: Option<String>,
}

impl SearchResult {
    /// Creates a search result. An empty catalog code is treated as absent.
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, code: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            code: code.filter(|c| !c.is_empty()),
        }
    }

    /// Returns the book identifier.
    #[must_use]
    pub fn id(&self) -> &BookId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the external catalog code (ISBN), if the book has one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
