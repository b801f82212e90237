// SPDX-License-Identifier: MPL-2.0
//! Live search field with its result dropdown.
//!
//! The component owns a [`Session`] and executes the commands it returns:
//! debounce timers through a [`Debouncer`], lookups through the
//! [`LookupClient`], focus requests through a widget operation. Everything
//! the user sees is projected from the session's [`Dropdown`] value.
//!
//! Outside clicks are detected with hover tracking: `mouse_area`s around the
//! field container and the search button record whether the pointer is over
//! them, and the application forwards every left press to
//! [`Message::PointerPressed`].

use crate::config::SearchConfig;
use crate::domain::book::SearchResult;
use crate::error::LookupError;
use crate::i18n::I18n;
use crate::search::{
    ClickTarget, Command, Debouncer, Dropdown, LookupClient, LookupOutcome, LookupRequest,
    RowLabels, Sequence, Session, Ticket,
};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, mouse_area, operation, scrollable, text, text_input, Column, Container,
    Id, Row, Text,
};
use iced::{alignment, Color, Element, Length, Task, Theme};

/// Widget id of the search field.
pub const INPUT_ID: &str = "search-input";

/// Messages handled by the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    SearchPressed,
    DebounceElapsed(Ticket),
    LookupFinished {
        seq: Sequence,
        result: Result<Vec<SearchResult>, LookupError>,
    },
    ResultSelected(usize),
    /// A left button press anywhere in the window.
    PointerPressed,
    ContainerHovered(bool),
    ButtonHovered(bool),
}

/// Events reported to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    LookupIssued(LookupRequest),
    LookupFailed { seq: Sequence, error: LookupError },
    ResponseDiscarded(Sequence),
    Selected(SearchResult),
}

#[derive(Debug, Clone, Copy, Default)]
struct Hover {
    container: bool,
    button: bool,
}

impl Hover {
    fn target(self) -> ClickTarget {
        if self.container {
            ClickTarget::Container
        } else if self.button {
            ClickTarget::SearchButton
        } else {
            ClickTarget::Outside
        }
    }
}

/// Search bar state.
#[derive(Debug)]
pub struct State {
    session: Session,
    debouncer: Debouncer,
    /// `None` leaves the widget inert.
    client: Option<LookupClient>,
    labels: RowLabels,
    hover: Hover,
}

impl State {
    /// Builds the search bar for `endpoint`.
    ///
    /// An invalid endpoint is logged and leaves the widget inert.
    pub fn new(config: &SearchConfig, endpoint: Option<&str>, i18n: &I18n) -> Self {
        let client = endpoint.and_then(|endpoint| {
            match LookupClient::new(endpoint, config.request_timeout()) {
                Ok(client) => {
                    tracing::info!(endpoint = %client.endpoint(), "live search enabled");
                    Some(client)
                }
                Err(err) => {
                    tracing::warn!(endpoint, error = %err, "live search disabled");
                    None
                }
            }
        });

        Self::with_client(config, client, labels_from(i18n))
    }

    /// Builds the search bar around an existing client.
    #[must_use]
    pub fn with_client(
        config: &SearchConfig,
        client: Option<LookupClient>,
        labels: RowLabels,
    ) -> Self {
        Self {
            session: Session::new(config.debounce(), config.race_policy),
            debouncer: Debouncer::new(),
            client,
            labels,
            hover: Hover::default(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.client.is_none()
    }

    /// Handles a message, returning the effect for the application and the
    /// task to run.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ContainerHovered(hovered) => {
                self.hover.container = hovered;
                (Effect::None, Task::none())
            }
            Message::ButtonHovered(hovered) => {
                self.hover.button = hovered;
                (Effect::None, Task::none())
            }
            Message::InputChanged(value) if self.is_inert() => {
                self.session.set_value(value);
                (Effect::None, Task::none())
            }
            _ if self.is_inert() => (Effect::None, Task::none()),
            Message::InputChanged(value) => {
                let command = self.session.input_changed(value);
                self.execute(command)
            }
            Message::SearchPressed => {
                let command = self.session.search_pressed();
                self.execute(command)
            }
            Message::DebounceElapsed(ticket) => match self.session.debounce_elapsed(ticket) {
                Some(request) => {
                    self.debouncer.disarm();
                    self.execute(Command::Lookup(request))
                }
                None => (Effect::None, Task::none()),
            },
            Message::LookupFinished { seq, result } => self.finish_lookup(seq, result),
            Message::ResultSelected(index) => match self.session.select(index) {
                Some(selected) => (Effect::Selected(selected), Task::none()),
                None => (Effect::None, Task::none()),
            },
            Message::PointerPressed => {
                self.session.pointer_pressed(self.hover.target());
                (Effect::None, Task::none())
            }
        }
    }

    fn execute(&mut self, command: Command) -> (Effect, Task<Message>) {
        match command {
            Command::Arm { ticket, delay } => {
                let task = self.debouncer.arm(ticket, delay, Message::DebounceElapsed);
                (Effect::None, task)
            }
            Command::Disarm => {
                self.debouncer.disarm();
                (Effect::None, Task::none())
            }
            Command::FocusInput => (Effect::None, operation::focus(Id::new(INPUT_ID))),
            Command::Lookup(request) => {
                let Some(client) = self.client.clone() else {
                    return (Effect::None, Task::none());
                };
                tracing::debug!(seq = request.seq.value(), trigger = ?request.trigger, "lookup issued");
                let seq = request.seq;
                let task = Task::perform(client.search(request.query.clone()), move |result| {
                    Message::LookupFinished { seq, result }
                });
                (Effect::LookupIssued(request), task)
            }
        }
    }

    fn finish_lookup(
        &mut self,
        seq: Sequence,
        result: Result<Vec<SearchResult>, LookupError>,
    ) -> (Effect, Task<Message>) {
        let failure = result.as_ref().err().cloned();
        let outcome = self.session.lookup_finished(seq, result);

        let effect = match (outcome, failure) {
            (LookupOutcome::Discarded, _) => {
                tracing::debug!(seq = seq.value(), "stale response discarded");
                Effect::ResponseDiscarded(seq)
            }
            (_, Some(error)) => Effect::LookupFailed { seq, error },
            (_, None) => Effect::None,
        };
        (effect, Task::none())
    }

    /// Renders the field, the search button and the dropdown.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let placeholder = if self.is_inert() {
            i18n.tr("search-disabled")
        } else {
            i18n.tr("search-placeholder")
        };

        let input = text_input(&placeholder, self.session.value())
            .id(Id::new(INPUT_ID))
            .on_input(Message::InputChanged)
            .padding(spacing::XS)
            .size(typography::BODY_LG);

        let mut field = Column::new().spacing(spacing::XXS).push(input);
        if let Some(dropdown) = self.dropdown_view(i18n) {
            field = field.push(dropdown);
        }

        let field_area = mouse_area(Container::new(field).width(Length::Fill))
            .on_enter(Message::ContainerHovered(true))
            .on_exit(Message::ContainerHovered(false));

        let mut search_button = button(
            Text::new(i18n.tr("search-button"))
                .size(typography::BODY)
                .align_y(alignment::Vertical::Center),
        )
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .padding([spacing::XS, spacing::MD]);
        if !self.is_inert() {
            search_button = search_button.on_press(Message::SearchPressed);
        }

        let button_area = mouse_area(search_button)
            .on_enter(Message::ButtonHovered(true))
            .on_exit(Message::ButtonHovered(false));

        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Top)
            .width(Length::Fixed(sizing::SEARCH_WIDTH))
            .push(field_area)
            .push(button_area)
            .into()
    }

    fn dropdown_view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let body: Element<'a, Message> = match self.session.dropdown() {
            Dropdown::Hidden => return None,
            Dropdown::Loading => placeholder(i18n.tr("search-loading"), None),
            Dropdown::Empty => placeholder(i18n.tr("search-no-results"), None),
            Dropdown::Error => placeholder(i18n.tr("search-error"), Some(palette::ERROR_500)),
            dropdown @ Dropdown::Results(_) => {
                let rows = self
                    .labels
                    .rows(dropdown)
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        let content = Column::new()
                            .spacing(spacing::XXS / 2.0)
                            .push(Text::new(row.title).size(typography::BODY))
                            .push(
                                Text::new(row.detail)
                                    .size(typography::CAPTION)
                                    .style(|theme: &Theme| text::Style {
                                        color: Some(muted(theme)),
                                    }),
                            );
                        button(content)
                            .width(Length::Fill)
                            .padding([spacing::XS, spacing::SM])
                            .style(row_style)
                            .on_press(Message::ResultSelected(index))
                            .into()
                    });
                scrollable(Column::with_children(rows))
                    .height(Length::Shrink)
                    .into()
            }
        };

        Some(
            Container::new(body)
                .width(Length::Fill)
                .max_height(sizing::DROPDOWN_MAX_HEIGHT)
                .style(dropdown_style)
                .into(),
        )
    }
}

fn labels_from(i18n: &I18n) -> RowLabels {
    RowLabels {
        id: i18n.tr("search-id-label"),
        code: i18n.tr("search-code-label"),
        missing: i18n.tr("search-missing-code"),
    }
}

fn placeholder<'a>(label: String, color: Option<Color>) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(color.unwrap_or_else(|| muted(theme))),
            }),
    )
    .padding(spacing::SM)
    .into()
}

fn muted(theme: &Theme) -> Color {
    Color {
        a: 0.7,
        ..theme.palette().text
    }
}

fn dropdown_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.base.color)),
        border: iced::Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

fn row_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border::default(),
        ..Default::default()
    }
}
