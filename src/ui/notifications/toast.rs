// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent. The message is a
//! plain [`Text`], so caller content is displayed verbatim and never
//! interpreted as markup.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at `alpha` opacity.
    pub fn view(notification: &Notification, alpha: f32) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent = fade(severity.color(), alpha);

        let icon = Text::new(severity.icon())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            });

        // Layout: [icon] [message]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(icon)
                    .width(Length::Fixed(sizing::ICON_MD))
                    .align_x(alignment::Horizontal::Center),
            )
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the toast stack in the bottom-right corner, newest last.
    ///
    /// Before the first notification there is no stack and nothing is drawn.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, manager.opacity(notification)))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let background = fade(theme.extended_palette().background.base.color, alpha);

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, alpha),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}
