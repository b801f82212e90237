// SPDX-License-Identifier: MPL-2.0
//! Live book search.
//!
//! The search field turns keystrokes into debounced lookups against the book
//! service and shows the outcome in a dropdown below the field.
//!
//! # Components
//!
//! - [`session`] - Pure state machine: query, debounce slot, dropdown state
//! - [`dropdown`] - The dropdown as an explicit state value
//! - [`debounce`] - Cancellable delayed task used for the typing path
//! - [`race`] - Ordering policy for overlapping lookups
//! - [`lookup`] - HTTP client for `GET /api/books?q=`
//!
//! The widget that projects this state onto Iced lives in
//! [`crate::ui::search_bar`].

pub mod debounce;
pub mod dropdown;
pub mod lookup;
pub mod race;
pub mod session;

pub use debounce::{Debouncer, Slot, Ticket};
pub use dropdown::{Dropdown, ResultRow, RowLabels};
pub use lookup::{parse_results, LookupClient};
pub use race::{RacePolicy, Sequence, SequenceGuard};
pub use session::{ClickTarget, Command, LookupOutcome, LookupRequest, Session, Trigger};
