// SPDX-License-Identifier: MPL-2.0
//! Search session state machine.
//!
//! The session holds everything the search field needs between events: the
//! field value, the debounce slot, the lookup sequence and the dropdown. It
//! performs no I/O; each operation returns the side effect it needs as a
//! [`Command`] that the widget layer executes.

use super::debounce::{Slot, Ticket};
use super::dropdown::Dropdown;
use super::race::{RacePolicy, Sequence, SequenceGuard};
use crate::domain::book::SearchResult;
use crate::domain::ui::DebounceDelay;
use crate::error::LookupError;
use std::time::Duration;

/// What started a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The debounce delay elapsed after typing stopped.
    Debounce,
    /// The search button was pressed.
    Button,
}

impl Trigger {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::Debounce => "debounce",
            Trigger::Button => "button",
        }
    }
}

/// A lookup the widget must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: Sequence,
    /// Trimmed, never empty.
    pub query: String,
    pub trigger: Trigger,
}

/// Side effect requested by a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the debounce delay for `ticket`, aborting any running one.
    Arm { ticket: Ticket, delay: Duration },
    /// Abort the running debounce delay.
    Disarm,
    /// Issue a lookup now.
    Lookup(LookupRequest),
    /// Move keyboard focus to the search field.
    FocusInput,
}

/// Where a pointer press landed, relative to the search widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the container holding the field and the dropdown.
    Container,
    /// On the search button.
    SearchButton,
    /// Anywhere else.
    Outside,
}

/// What happened to a lookup response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The dropdown now shows this response.
    Rendered,
    /// The dropdown was hidden when the response arrived and stays hidden.
    Hidden,
    /// The race policy dropped the response as stale.
    Discarded,
}

/// State of the search field and its dropdown.
#[derive(Debug, Clone)]
pub struct Session {
    value: String,
    delay: DebounceDelay,
    slot: Slot,
    /// Query captured when the slot was armed.
    pending: Option<String>,
    sequence: SequenceGuard,
    dropdown: Dropdown,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DebounceDelay::default(), RacePolicy::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(delay: DebounceDelay, policy: RacePolicy) -> Self {
        Self {
            value: String::new(),
            delay,
            slot: Slot::default(),
            pending: None,
            sequence: SequenceGuard::new(policy),
            dropdown: Dropdown::Hidden,
        }
    }

    /// Current field content, untrimmed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    /// Replaces the field content without arming, hiding or looking up.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// The user edited the field.
    ///
    /// An empty (after trimming) value hides the dropdown and disarms the
    /// timer; anything else re-arms it with the trimmed query.
    pub fn input_changed(&mut self, value: String) -> Command {
        let query = value.trim().to_string();
        self.value = value;

        if query.is_empty() {
            self.slot.disarm();
            self.pending = None;
            self.dropdown = Dropdown::Hidden;
            return Command::Disarm;
        }

        let ticket = self.slot.arm();
        self.pending = Some(query);
        Command::Arm {
            ticket,
            delay: self.delay.as_duration(),
        }
    }

    /// The debounce delay for `ticket` elapsed.
    ///
    /// Returns the lookup to issue, or `None` if the ticket was superseded.
    pub fn debounce_elapsed(&mut self, ticket: Ticket) -> Option<LookupRequest> {
        if !self.slot.fire(ticket) {
            return None;
        }
        let query = self.pending.take()?;
        Some(self.begin_lookup(query, Trigger::Debounce))
    }

    /// The search button was pressed.
    ///
    /// Looks up the current value right away, independently of any armed
    /// debounce delay. An empty value only focuses the field.
    pub fn search_pressed(&mut self) -> Command {
        let query = self.value.trim();
        if query.is_empty() {
            return Command::FocusInput;
        }
        let query = query.to_string();
        Command::Lookup(self.begin_lookup(query, Trigger::Button))
    }

    fn begin_lookup(&mut self, query: String, trigger: Trigger) -> LookupRequest {
        self.dropdown = Dropdown::Loading;
        LookupRequest {
            seq: self.sequence.issue(),
            query,
            trigger,
        }
    }

    /// A lookup finished.
    pub fn lookup_finished(
        &mut self,
        seq: Sequence,
        result: Result<Vec<SearchResult>, LookupError>,
    ) -> LookupOutcome {
        if !self.sequence.admit(seq) {
            return LookupOutcome::Discarded;
        }
        if !self.dropdown.is_visible() {
            return LookupOutcome::Hidden;
        }

        self.dropdown = match result {
            Ok(results) => Dropdown::from_results(results),
            Err(_) => Dropdown::Error,
        };
        LookupOutcome::Rendered
    }

    /// The user clicked the result row at `index`.
    ///
    /// Copies its title into the field and hides the dropdown. No lookup is
    /// issued.
    pub fn select(&mut self, index: usize) -> Option<SearchResult> {
        let selected = self.dropdown.results().get(index).cloned()?;
        self.value = selected.title().to_string();
        self.dropdown = Dropdown::Hidden;
        Some(selected)
    }

    /// A pointer press happened somewhere in the window.
    pub fn pointer_pressed(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.dropdown = Dropdown::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::BookId;

    fn book(id: u64, title: &str) -> SearchResult {
        SearchResult::new(BookId::from(id), title, None)
    }

    fn armed_ticket(command: Command) -> Ticket {
        match command {
            Command::Arm { ticket, .. } => ticket,
            other => panic!("expected Arm, got {other:?}"),
        }
    }

    fn lookup(command: Command) -> LookupRequest {
        match command {
            Command::Lookup(request) => request,
            other => panic!("expected Lookup, got {other:?}"),
        }
    }

    #[test]
    fn blank_input_never_arms_and_hides() {
        for value in ["", " ", "\t  \n"] {
            let mut session = Session::default();
            session.dropdown = Dropdown::Empty;

            assert_eq!(session.input_changed(value.to_string()), Command::Disarm);
            assert_eq!(session.dropdown(), &Dropdown::Hidden);
            assert!(session.slot.armed().is_none());
        }
    }

    #[test]
    fn typing_arms_with_configured_delay() {
        let mut session = Session::default();
        match session.input_changed("du".to_string()) {
            Command::Arm { delay, .. } => assert_eq!(delay, Duration::from_millis(300)),
            other => panic!("expected Arm, got {other:?}"),
        }
        assert!(session.slot.armed().is_some());
        assert_eq!(session.dropdown(), &Dropdown::Hidden);
    }

    #[test]
    fn only_last_keystroke_of_a_burst_looks_up() {
        let mut session = Session::default();
        let t1 = armed_ticket(session.input_changed("d".to_string()));
        let t2 = armed_ticket(session.input_changed("du".to_string()));
        let t3 = armed_ticket(session.input_changed(" dun ".to_string()));

        assert_eq!(session.debounce_elapsed(t1), None);
        assert_eq!(session.debounce_elapsed(t2), None);

        let request = session.debounce_elapsed(t3).expect("last ticket fires");
        assert_eq!(request.query, "dun");
        assert_eq!(request.trigger, Trigger::Debounce);
        assert_eq!(session.dropdown(), &Dropdown::Loading);

        assert_eq!(session.debounce_elapsed(t3), None);
    }

    #[test]
    fn clearing_the_field_cancels_pending_lookup() {
        let mut session = Session::default();
        let ticket = armed_ticket(session.input_changed("dune".to_string()));
        session.input_changed(String::new());

        assert_eq!(session.debounce_elapsed(ticket), None);
    }

    #[test]
    fn button_looks_up_immediately_and_keeps_debounce_armed() {
        let mut session = Session::default();
        let ticket = armed_ticket(session.input_changed("dune".to_string()));

        let request = lookup(session.search_pressed());
        assert_eq!(request.query, "dune");
        assert_eq!(request.trigger, Trigger::Button);
        assert_eq!(session.dropdown(), &Dropdown::Loading);

        let debounced = session.debounce_elapsed(ticket).expect("still armed");
        assert!(debounced.seq > request.seq);
    }

    #[test]
    fn button_with_blank_value_focuses_field() {
        let mut session = Session::default();
        session.input_changed("   ".to_string());
        assert_eq!(session.search_pressed(), Command::FocusInput);
        assert_eq!(session.dropdown(), &Dropdown::Hidden);
    }

    #[test]
    fn results_replace_loading_placeholder() {
        let mut session = Session::default();
        session.input_changed("dune".to_string());
        let request = lookup(session.search_pressed());

        let outcome = session.lookup_finished(request.seq, Ok(vec![book(1, "Dune")]));
        assert_eq!(outcome, LookupOutcome::Rendered);
        assert_eq!(session.dropdown().results().len(), 1);
    }

    #[test]
    fn empty_and_failed_lookups_show_placeholders() {
        let mut session = Session::default();
        session.input_changed("zzz".to_string());

        let first = lookup(session.search_pressed());
        session.lookup_finished(first.seq, Ok(Vec::new()));
        assert_eq!(session.dropdown(), &Dropdown::Empty);

        let second = lookup(session.search_pressed());
        session.lookup_finished(second.seq, Err(LookupError::Status(500)));
        assert_eq!(session.dropdown(), &Dropdown::Error);
    }

    #[test]
    fn failure_does_not_disable_later_lookups() {
        let mut session = Session::default();
        session.input_changed("dune".to_string());
        let failed = lookup(session.search_pressed());
        session.lookup_finished(failed.seq, Err(LookupError::Transport("refused".into())));

        let ticket = armed_ticket(session.input_changed("dune m".to_string()));
        let retry = session.debounce_elapsed(ticket).expect("lookup issued");
        session.lookup_finished(retry.seq, Ok(vec![book(2, "Dune Messiah")]));
        assert_eq!(session.dropdown().results()[0].title(), "Dune Messiah");
    }

    #[test]
    fn last_arrival_wins_by_default() {
        let mut session = Session::default();
        session.input_changed("a".to_string());
        let a = lookup(session.search_pressed());
        session.input_changed("b".to_string());
        let b = lookup(session.search_pressed());

        // B arrives first, A last: A is shown.
        session.lookup_finished(b.seq, Ok(vec![book(2, "B")]));
        session.lookup_finished(a.seq, Ok(vec![book(1, "A")]));
        assert_eq!(session.dropdown().results()[0].title(), "A");

        // A arrives first, B last: B is shown.
        let a = lookup(session.search_pressed());
        let b = lookup(session.search_pressed());
        session.lookup_finished(a.seq, Ok(vec![book(1, "A")]));
        session.lookup_finished(b.seq, Ok(vec![book(2, "B")]));
        assert_eq!(session.dropdown().results()[0].title(), "B");
    }

    #[test]
    fn latest_issued_discards_stale_response() {
        let mut session = Session::new(DebounceDelay::default(), RacePolicy::LatestIssued);
        session.input_changed("a".to_string());
        let a = lookup(session.search_pressed());
        let b = lookup(session.search_pressed());

        assert_eq!(
            session.lookup_finished(b.seq, Ok(vec![book(2, "B")])),
            LookupOutcome::Rendered
        );
        assert_eq!(
            session.lookup_finished(a.seq, Ok(vec![book(1, "A")])),
            LookupOutcome::Discarded
        );
        assert_eq!(session.dropdown().results()[0].title(), "B");
    }

    #[test]
    fn response_after_outside_click_stays_hidden() {
        let mut session = Session::default();
        session.input_changed("dune".to_string());
        let request = lookup(session.search_pressed());
        session.pointer_pressed(ClickTarget::Outside);

        let outcome = session.lookup_finished(request.seq, Ok(vec![book(1, "Dune")]));
        assert_eq!(outcome, LookupOutcome::Hidden);
        assert_eq!(session.dropdown(), &Dropdown::Hidden);
    }

    #[test]
    fn selecting_a_row_fills_field_and_hides() {
        let mut session = Session::default();
        session.input_changed("du".to_string());
        let request = lookup(session.search_pressed());
        session.lookup_finished(request.seq, Ok(vec![book(1, "Dune"), book(2, "Dubliners")]));

        let selected = session.select(1).expect("row exists");
        assert_eq!(selected.title(), "Dubliners");
        assert_eq!(session.value(), "Dubliners");
        assert_eq!(session.dropdown(), &Dropdown::Hidden);
    }

    #[test]
    fn selecting_without_results_does_nothing() {
        let mut session = Session::default();
        session.input_changed("du".to_string());
        assert_eq!(session.select(0), None);
        assert_eq!(session.value(), "du");
    }

    #[test]
    fn outside_click_is_idempotent() {
        let mut session = Session::default();
        session.pointer_pressed(ClickTarget::Outside);
        assert_eq!(session.dropdown(), &Dropdown::Hidden);

        session.dropdown = Dropdown::Error;
        session.pointer_pressed(ClickTarget::Outside);
        session.pointer_pressed(ClickTarget::Outside);
        assert_eq!(session.dropdown(), &Dropdown::Hidden);
    }

    #[test]
    fn set_value_has_no_side_effects() {
        let mut session = Session::default();
        session.set_value("dune".to_string());
        assert_eq!(session.value(), "dune");
        assert!(session.slot.armed().is_none());
        assert_eq!(session.dropdown(), &Dropdown::Hidden);
    }

    #[test]
    fn clicks_on_widget_keep_dropdown_open() {
        let mut session = Session::default();
        session.dropdown = Dropdown::Empty;
        session.pointer_pressed(ClickTarget::Container);
        session.pointer_pressed(ClickTarget::SearchButton);
        assert_eq!(session.dropdown(), &Dropdown::Empty);
    }
}
