// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the book lookup service.
//!
//! The service answers `GET {endpoint}/api/books?q=<query>` with a JSON array
//! of book records. Records carry more columns than the widget needs; only
//! `book_id`, `title` and `isbn` are read.

use crate::domain::book::{BookId, SearchResult};
use crate::error::LookupError;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// Path of the search route, relative to the configured endpoint.
const SEARCH_PATH: &str = "api/books";

/// `book_id` is numeric in the catalog but some deployments serialize it as
/// a string. Any JSON number is kept as written, sign and fraction included.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(serde_json::Number),
    Text(String),
}

impl From<WireId> for BookId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => BookId::new(n.to_string()),
            WireId::Text(s) => BookId::new(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookRecord {
    book_id: WireId,
    title: String,
    #[serde(default)]
    isbn: Option<String>,
}

impl From<BookRecord> for SearchResult {
    fn from(record: BookRecord) -> Self {
        SearchResult::new(BookId::from(record.book_id), record.title, record.isbn)
    }
}

/// Parses a response body into results, keeping service order.
///
/// # Errors
///
/// Returns [`LookupError::Payload`] if the body is not a JSON array of book
/// records.
pub fn parse_results(body: &[u8]) -> Result<Vec<SearchResult>, LookupError> {
    let records: Vec<BookRecord> =
        serde_json::from_slice(body).map_err(|e| LookupError::Payload(e.to_string()))?;
    Ok(records.into_iter().map(SearchResult::from).collect())
}

/// Client bound to one lookup endpoint.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl LookupClient {
    /// Builds a client for `endpoint`.
    ///
    /// An endpoint with a path prefix must end with `/` for the prefix to be
    /// kept (`http://host/library/`).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the endpoint is not a valid URL
    /// or the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| LookupError::Transport(format!("invalid endpoint {endpoint}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for `query`, with the query form-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the endpoint cannot be joined
    /// with the search path (e.g. a `data:` URL).
    pub fn search_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = self
            .endpoint
            .join(SEARCH_PATH)
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// Performs one lookup. The request is never retried.
    ///
    /// Takes `self` by value so the future is `'static` and can be handed to
    /// the runtime directly.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] for transport failures, non-2xx statuses and
    /// malformed bodies.
    pub async fn search(self, query: String) -> Result<Vec<SearchResult>, LookupError> {
        let url = self.search_url(&query)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        parse_results(&body)
    }
}
