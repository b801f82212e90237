// SPDX-License-Identifier: MPL-2.0
//! Dropdown state.
//!
//! The dropdown below the search field is modelled as a single value that the
//! view projects onto widgets. Each transition replaces the whole value, so
//! no content from an earlier lookup can survive a later one.

use crate::domain::book::SearchResult;

/// What the dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dropdown {
    /// Not shown.
    #[default]
    Hidden,
    /// "Searching..." placeholder while a lookup is in flight.
    Loading,
    /// One clickable row per result, in service order. Never empty.
    Results(Vec<SearchResult>),
    /// "No results found" placeholder.
    Empty,
    /// "Error fetching data" placeholder.
    Error,
}

impl Dropdown {
    /// Builds the dropdown for a successful lookup.
    #[must_use]
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        if results.is_empty() {
            Dropdown::Empty
        } else {
            Dropdown::Results(results)
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Dropdown::Hidden)
    }

    /// Rows currently rendered; empty unless showing results.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        match self {
            Dropdown::Results(results) => results,
            _ => &[],
        }
    }
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub detail: String,
}

/// Localized labels for the secondary line of a result row.
#[derive(Debug, Clone)]
pub struct RowLabels {
    pub id: String,
    pub code: String,
    /// Shown when a book has no catalog code.
    pub missing: String,
}

impl Default for RowLabels {
    fn default() -> Self {
        Self {
            id: "Book ID".to_string(),
            code: "ISBN".to_string(),
            missing: "N/A".to_string(),
        }
    }
}

impl RowLabels {
    /// Secondary line of a result row: identifier and catalog code.
    #[must_use]
    pub fn detail(&self, result: &SearchResult) -> String {
        format!(
            "{}: {} | {}: {}",
            self.id,
            result.id(),
            self.code,
            result.code().unwrap_or(self.missing.as_str())
        )
    }

    /// Projects the rows of `dropdown`, in service order.
    #[must_use]
    pub fn rows(&self, dropdown: &Dropdown) -> Vec<ResultRow> {
        dropdown
            .results()
            .iter()
            .map(|result| ResultRow {
                title: result.title().to_string(),
                detail: self.detail(result),
            })
            .collect()
    }
}
