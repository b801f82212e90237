// SPDX-License-Identifier: MPL-2.0
//! Ordering policy for overlapping lookups.
//!
//! Requests are never cancelled once issued, so two lookups can be in flight
//! at the same time (a button press racing a debounced keystroke, or a slow
//! response overtaken by a fast one). The policy decides which responses are
//! allowed to replace the dropdown content.

use serde::Deserialize;

/// Which response wins when lookups overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RacePolicy {
    /// Every response is rendered in arrival order; whichever arrives last
    /// wins, even if it answers an older query.
    #[default]
    LastArrival,
    /// A response older than the most recently rendered one is dropped.
    LatestIssued,
}

/// Monotonically increasing tag attached to each issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(u64);

impl Sequence {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues sequence numbers and filters responses according to a
/// [`RacePolicy`].
#[derive(Debug, Clone, Default)]
pub struct SequenceGuard {
    policy: RacePolicy,
    next: u64,
    last_rendered: Option<Sequence>,
}

impl SequenceGuard {
    #[must_use]
    pub fn new(policy: RacePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Tags a new lookup.
    pub fn issue(&mut self) -> Sequence {
        let seq = Sequence(self.next);
        self.next += 1;
        seq
    }

    /// Returns whether the response for `seq` may be rendered, and records it
    /// as the latest rendered response if so.
    pub fn admit(&mut self, seq: Sequence) -> bool {
        let admitted = match self.policy {
            RacePolicy::LastArrival => true,
            RacePolicy::LatestIssued => self.last_rendered.is_none_or(|last| seq >= last),
        };
        if admitted {
            self.last_rendered = Some(seq);
        }
        admitted
    }

    /// Sequence of the response currently on screen, if any.
    #[must_use]
    pub fn last_rendered(&self) -> Option<Sequence> {
        self.last_rendered
    }
}
