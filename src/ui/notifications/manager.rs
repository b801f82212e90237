// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! Each toast runs its own two-stage timer chain: `display` after creation
//! it starts fading ([`Message::BeginExit`]), and `exit` later it is removed
//! ([`Message::Remove`]). Toasts never wait on one another, so removal order
//! follows each toast's own schedule.

use super::notification::{Notification, NotificationId, Severity};
use crate::domain::ui::ToastTiming;
use iced::{time, Subscription, Task};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame interval of the fade animation.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The display interval of a toast ended.
    BeginExit(NotificationId),
    /// The exit animation of a toast ended.
    Remove(NotificationId),
    /// Animation frame while a toast is fading.
    Tick(Instant),
}

/// Identity of the toast stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackId(u64);

impl StackId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The single on-screen container toasts are appended to.
#[derive(Debug)]
pub struct ToastStack {
    id: StackId,
    /// Oldest first.
    toasts: VecDeque<Notification>,
}

impl ToastStack {
    fn new() -> Self {
        Self {
            id: StackId::new(),
            toasts: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StackId {
        self.id
    }

    /// Toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.toasts.iter_mut().find(|n| n.id() == id)
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|n| n.id() != id);
        self.toasts.len() < before
    }
}

/// The notify-only interface handed to code that raises toasts.
pub trait Notifier {
    /// Message type of the returned timer task.
    type Message;

    /// Shows `message` as a new toast.
    fn notify(&mut self, message: String, severity: Severity) -> Task<Self::Message>;
}

/// A toast timer: `message` is due once `delay` has elapsed.
#[derive(Debug, Clone)]
pub struct Timer {
    pub delay: Duration,
    pub message: Message,
}

impl Timer {
    /// Resolves to the due message after the delay.
    pub async fn elapsed(self) -> Message {
        tokio::time::sleep(self.delay).await;
        self.message
    }

    fn into_task(self) -> Task<Message> {
        Task::perform(self.elapsed(), std::convert::identity)
    }
}

/// Owns the toast stack and drives each toast's timers.
#[derive(Debug)]
pub struct Manager {
    /// Created on the first notification, never dropped afterwards.
    stack: Option<ToastStack>,
    timing: ToastTiming,
    max_visible: Option<usize>,
    /// Time of the latest animation frame.
    now: Instant,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ToastTiming::default(), None)
    }
}

impl Manager {
    /// `max_visible` of `None` keeps every toast until its own timers end.
    #[must_use]
    pub fn new(timing: ToastTiming, max_visible: Option<usize>) -> Self {
        Self {
            stack: None,
            timing,
            max_visible,
            now: Instant::now(),
        }
    }

    /// Appends a toast and returns its first timer as a task.
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        self.enqueue(notification).into_task()
    }

    /// Handles a notification message, returning the follow-up timer task if any.
    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        self.advance(message).map_or_else(Task::none, Timer::into_task)
    }

    /// Appends a toast and returns the timer that starts its exit.
    pub fn enqueue(&mut self, notification: Notification) -> Timer {
        let id = notification.id();
        let stack = self.stack.get_or_insert_with(|| {
            let stack = ToastStack::new();
            tracing::debug!(stack = ?stack.id(), "toast stack created");
            stack
        });

        stack.toasts.push_back(notification);
        if let Some(max) = self.max_visible {
            while stack.toasts.len() > max {
                if let Some(dropped) = stack.toasts.pop_front() {
                    tracing::debug!(id = ?dropped.id(), "toast dropped, stack full");
                }
            }
        }

        Timer {
            delay: self.timing.display(),
            message: Message::BeginExit(id),
        }
    }

    /// Applies a notification message, returning the follow-up timer if any.
    pub fn advance(&mut self, message: Message) -> Option<Timer> {
        match message {
            Message::BeginExit(id) => {
                let now = Instant::now();
                self.now = now;
                let started = self
                    .stack
                    .as_mut()
                    .and_then(|stack| stack.get_mut(id))
                    .is_some_and(|toast| toast.begin_exit(now));
                started.then(|| Timer {
                    delay: self.timing.exit(),
                    message: Message::Remove(id),
                })
            }
            Message::Remove(id) => {
                if let Some(stack) = self.stack.as_mut() {
                    stack.remove(id);
                }
                None
            }
            Message::Tick(now) => {
                self.now = now;
                None
            }
        }
    }

    /// Animation frames, only while some toast is fading.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_exiting() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    #[must_use]
    pub fn stack(&self) -> Option<&ToastStack> {
        self.stack.as_ref()
    }

    /// Currently shown toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.stack.iter().flat_map(|stack| stack.toasts.iter())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.stack.as_ref().map_or(0, |stack| stack.toasts.len())
    }

    #[must_use]
    pub fn has_exiting(&self) -> bool {
        self.visible().any(Notification::is_exiting)
    }

    /// Opacity of `notification` at the latest frame.
    #[must_use]
    pub fn opacity(&self, notification: &Notification) -> f32 {
        notification.opacity(self.now, self.timing.exit())
    }
}

impl Notifier for Manager {
    type Message = Message;

    fn notify(&mut self, message: String, severity: Severity) -> Task<Message> {
        self.push(Notification::new(severity, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_id(manager: &Manager) -> NotificationId {
        manager.visible().next().map(Notification::id).expect("a toast")
    }

    #[test]
    fn new_manager_has_no_stack() {
        let manager = Manager::default();
        assert!(manager.stack().is_none());
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn stack_is_created_once_and_reused() {
        let mut manager = Manager::default();
        let _ = manager.notify("Saved".to_string(), Severity::Success);
        let stack_id = manager.stack().map(ToastStack::id);

        let _ = manager.notify("Saved again".to_string(), Severity::Success);
        assert_eq!(manager.stack().map(ToastStack::id), stack_id);
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn stack_survives_last_removal() {
        let mut manager = Manager::default();
        let _ = manager.notify("Saved".to_string(), Severity::Success);
        let stack_id = manager.stack().map(ToastStack::id);
        let id = first_id(&manager);

        let _ = manager.handle_message(Message::BeginExit(id));
        let _ = manager.handle_message(Message::Remove(id));

        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.stack().map(ToastStack::id), stack_id);
    }

    #[test]
    fn notify_appends_in_order() {
        let mut manager = Manager::default();
        let _ = manager.notify("first".to_string(), Severity::Success);
        let _ = manager.notify("second".to_string(), Severity::Error);

        let messages: Vec<_> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn begin_exit_marks_toast_and_keeps_it() {
        let mut manager = Manager::default();
        let _ = manager.notify("Book issued!".to_string(), Severity::Success);
        let id = first_id(&manager);

        let _ = manager.handle_message(Message::BeginExit(id));
        assert_eq!(manager.visible_count(), 1);
        assert!(manager.has_exiting());
    }

    #[test]
    fn toasts_are_removed_independently() {
        let mut manager = Manager::default();
        let _ = manager.notify("a".to_string(), Severity::Success);
        let _ = manager.notify("b".to_string(), Severity::Error);
        let ids: Vec<_> = manager.visible().map(Notification::id).collect();

        // The newer toast finishes first; the older one is untouched.
        let _ = manager.handle_message(Message::BeginExit(ids[1]));
        let _ = manager.handle_message(Message::Remove(ids[1]));

        let remaining: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_eq!(remaining, vec![ids[0]]);
        assert!(!manager.has_exiting());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut manager = Manager::default();
        let stray = Notification::new(Severity::Success, "never shown").id();
        let _ = manager.handle_message(Message::BeginExit(stray));
        let _ = manager.handle_message(Message::Remove(stray));
        assert!(manager.stack().is_none());
    }

    #[test]
    fn unbounded_by_default() {
        let mut manager = Manager::default();
        for i in 0..50 {
            let _ = manager.notify(format!("toast {i}"), Severity::Success);
        }
        assert_eq!(manager.visible_count(), 50);
    }

    #[test]
    fn max_visible_drops_oldest() {
        let mut manager = Manager::new(ToastTiming::default(), Some(2));
        for message in ["one", "two", "three"] {
            let _ = manager.notify(message.to_string(), Severity::Success);
        }

        let messages: Vec<_> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn tick_advances_fade() {
        let mut manager = Manager::default();
        let _ = manager.notify("fading".to_string(), Severity::Success);
        let id = first_id(&manager);
        let _ = manager.handle_message(Message::BeginExit(id));

        let toast = manager.visible().next().cloned().expect("a toast");
        let halfway = Instant::now() + Duration::from_millis(150);
        let _ = manager.handle_message(Message::Tick(halfway));
        assert!(manager.opacity(&toast) <= 0.5);

        let _ = manager.handle_message(Message::Tick(halfway + Duration::from_millis(150)));
        assert_eq!(manager.opacity(&toast), 0.0);
    }

    #[test]
    fn exit_is_scheduled_once() {
        let mut manager = Manager::default();
        let timer = manager.enqueue(Notification::new(Severity::Success, "Saved"));

        assert!(manager.advance(timer.message.clone()).is_some());
        assert!(manager.advance(timer.message).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_chain_follows_configured_timing() {
        let mut manager = Manager::new(ToastTiming::new(5000, 700), None);
        let start = tokio::time::Instant::now();

        let display = manager.enqueue(Notification::new(Severity::Success, "Saved"));
        let id = first_id(&manager);
        assert_eq!(display.delay, Duration::from_millis(5000));

        let begin_exit = display.elapsed().await;
        assert!(matches!(begin_exit, Message::BeginExit(got) if got == id));
        assert_eq!(start.elapsed(), Duration::from_millis(5000));

        let exit = manager.advance(begin_exit).expect("exit timer");
        assert_eq!(exit.delay, Duration::from_millis(700));
        assert!(manager.has_exiting());

        let remove = exit.elapsed().await;
        assert!(matches!(remove, Message::Remove(got) if got == id));
        assert_eq!(start.elapsed(), Duration::from_millis(5700));

        assert!(manager.advance(remove).is_none());
        assert_eq!(manager.visible_count(), 0);
    }
}
