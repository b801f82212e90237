// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear in a stack in the bottom-right corner, stay for a fixed
//! display interval, fade out and are removed.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Phase` and `Severity`
//! - [`manager`] - `Manager` owning the lazily created `ToastStack` and the
//!   per-toast timers, plus the `Notifier` interface
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notifier, Severity};
//!
//! let mut manager = Manager::default();
//! let task = manager
//!     .notify("Book issued!".to_string(), Severity::Success)
//!     .map(Message::Notification);
//!
//! // In your view function
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{
    Manager, Message as NotificationMessage, Notifier, StackId, Timer, ToastStack,
};
pub use notification::{Notification, NotificationId, Phase, Severity};
pub use toast::Toast;

use crate::domain::flash::FlashMessage;
use iced::Task;

/// Shows each flash as a toast, in order.
pub fn notify_flashes<N>(notifier: &mut N, flashes: &[FlashMessage]) -> Task<N::Message>
where
    N: Notifier,
    N::Message: 'static,
{
    Task::batch(flashes.iter().map(|flash| {
        notifier.notify(
            flash.message().to_string(),
            Severity::parse(flash.category()),
        )
    }))
}
