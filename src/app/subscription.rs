// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::search_bar;
use iced::{event, keyboard, mouse, Subscription};

/// Routes window events to the app.
///
/// Every left press goes to the search bar, whether or not a widget captured
/// it, so clicks outside the search container close the dropdown.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| route_event(&event))
}

fn route_event(event: &event::Event) -> Option<Message> {
    match event {
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::SearchBar(search_bar::Message::PointerPressed))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(c),
            modifiers,
            ..
        }) if (c.as_str() == "d" || c.as_str() == "D")
            && modifiers.command()
            && modifiers.shift() =>
        {
            Some(Message::ExportDiagnostics)
        }
        _ => None,
    }
}
