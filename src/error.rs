// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Lookup(LookupError),
}

/// Ways a book lookup can fail.
///
/// All variants collapse into the same "error fetching data" placeholder in
/// the dropdown; the distinction only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a response (connection refused, timeout,
    /// invalid endpoint URL).
    Transport(String),

    /// The service answered with a non-2xx status code.
    Status(u16),

    /// The body was not valid JSON or not an array of books.
    Payload(String),
}

impl LookupError {
    /// Short, stable label used in diagnostic events and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Transport(_) => "transport",
            LookupError::Status(_) => "status",
            LookupError::Payload(_) => "payload",
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Transport(msg) => write!(f, "Request failed: {}", msg),
            LookupError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            LookupError::Payload(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Lookup(e) => write!(f, "Lookup Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LookupError> for Error {
    fn from(err: LookupError) -> Self {
        Error::Lookup(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
