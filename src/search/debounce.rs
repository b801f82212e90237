// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed task for the typing path.
//!
//! At most one delayed task is armed at any instant. Arming a new one aborts
//! the previous task before it runs.
//!
//! The work is split in two:
//! - [`Slot`] is plain state: it hands out [`Ticket`]s and remembers which
//!   one is armed. The search session owns it.
//! - [`Debouncer`] owns the abort handle of the running Iced task.
//!
//! Aborting an Iced task does not retract a message the task already
//! produced, so the elapsed message carries its ticket and the session only
//! acts on the ticket that is still armed.

use iced::task::Handle;
use iced::Task;
use std::fmt;
use std::time::Duration;

/// Identifies one arming of the debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Tracks the single armed ticket.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    next: u64,
    armed: Option<Ticket>,
}

impl Slot {
    /// Arms a new ticket, superseding any armed one.
    pub fn arm(&mut self) -> Ticket {
        let ticket = Ticket(self.next);
        self.next += 1;
        self.armed = Some(ticket);
        ticket
    }

    /// Disarms the slot. Returns `true` if a ticket was armed.
    pub fn disarm(&mut self) -> bool {
        self.armed.take().is_some()
    }

    /// Consumes `ticket` if it is the armed one.
    ///
    /// Returns `false` for superseded or already-fired tickets.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed == Some(ticket) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn armed(&self) -> Option<Ticket> {
        self.armed
    }
}

/// Resolves to `ticket` once `delay` has elapsed.
pub async fn elapse(ticket: Ticket, delay: Duration) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}

/// Runs the armed delay as an abortable Iced task.
#[derive(Default)]
pub struct Debouncer {
    handle: Option<Handle>,
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("running", &self.handle.is_some())
            .finish()
    }
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts the running delay, if any, and starts a new one that yields
    /// `on_elapsed(ticket)` after `delay`.
    pub fn arm<M>(
        &mut self,
        ticket: Ticket,
        delay: Duration,
        on_elapsed: impl FnOnce(Ticket) -> M + Send + 'static,
    ) -> Task<M>
    where
        M: Send + 'static,
    {
        self.disarm();
        let (task, handle) = Task::perform(elapse(ticket, delay), on_elapsed).abortable();
        self.handle = Some(handle);
        task
    }

    /// Aborts the running delay, if any.
    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_supersedes_previous_ticket() {
        let mut slot = Slot::default();
        let first = slot.arm();
        let second = slot.arm();

        assert!(!slot.fire(first));
        assert!(slot.fire(second));
    }

    #[test]
    fn ticket_fires_at_most_once() {
        let mut slot = Slot::default();
        let ticket = slot.arm();

        assert!(slot.fire(ticket));
        assert!(!slot.fire(ticket));
        assert_eq!(slot.armed(), None);
    }

    #[test]
    fn disarm_cancels_armed_ticket() {
        let mut slot = Slot::default();
        let ticket = slot.arm();

        assert!(slot.disarm());
        assert!(!slot.fire(ticket));
        assert!(!slot.disarm());
    }

    #[test]
    fn debouncer_keeps_one_handle() {
        let mut slot = Slot::default();
        let mut debouncer = Debouncer::new();

        let _first = debouncer.arm(slot.arm(), Duration::from_millis(300), |t| t);
        let _second = debouncer.arm(slot.arm(), Duration::from_millis(300), |t| t);
        assert!(debouncer.handle.is_some());

        debouncer.disarm();
        assert!(debouncer.handle.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn elapse_waits_for_full_delay() {
        let mut slot = Slot::default();
        let ticket = slot.arm();
        let start = tokio::time::Instant::now();

        let fired = elapse(ticket, Duration::from_millis(300)).await;

        assert_eq!(fired, ticket);
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
