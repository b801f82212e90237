// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The search bar sits at the top of the window; the toast stack is layered
//! above it in the bottom-right corner.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::search_bar;
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search: &'a search_bar::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the search page with the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(ctx.search.view(ctx.i18n).map(Message::SearchBar));

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}
