// SPDX-License-Identifier: MPL-2.0
//! Status messages queued by the host before the window opens.
//!
//! A flash carries a free-form category (usually `success` or `error`) and
//! the text to show. The category is kept verbatim; turning it into a toast
//! severity is the notification layer's job.

use std::fmt;
use std::str::FromStr;

/// Category used when a flash is written without one.
pub const DEFAULT_CATEGORY: &str = "success";

/// A one-shot status message, e.g. `error:No copies available for this book.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    category: String,
    message: String,
}

impl FlashMessage {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned when a flash has no message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyFlash;

impl fmt::Display for EmptyFlash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flash message is empty")
    }
}

impl std::error::Error for EmptyFlash {}

impl FromStr for FlashMessage {
    type Err = EmptyFlash;

    /// Parses `category:message`. Text without a colon is a message in the
    /// default category. Only the first colon separates, so the message may
    /// contain colons itself (`error:Error: Loan not found`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, message) = match s.split_once(':') {
            Some((category, message)) if !category.trim().is_empty() => {
                (category.trim(), message)
            }
            _ => (DEFAULT_CATEGORY, s),
        };

        if message.trim().is_empty() {
            return Err(EmptyFlash);
        }

        Ok(Self::new(category, message.trim()))
    }
}
