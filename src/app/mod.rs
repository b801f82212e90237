// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar and the
//! toast notifications.
//!
//! The `App` struct wires together the search widget, localization, the
//! notification stack and the diagnostics log, and translates component
//! effects into log entries and toasts.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_ENDPOINT};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsLog, REPORT_FILE};
use crate::i18n::I18n;
use crate::ui::notifications::{self, Severity};
use crate::ui::search_bar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    search: search_bar::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Recent search and notification events.
    diagnostics: DiagnosticsLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("search_inert", &self.search.is_inert())
            .field("toasts", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Picks the lookup endpoint: the CLI flag, then `[search] endpoint`, then
/// [`DEFAULT_ENDPOINT`]. A blank value disables live search.
fn resolve_endpoint(flag: Option<&str>, config: &Config) -> Option<String> {
    let endpoint = flag
        .or(config.search.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT)
        .trim();
    if endpoint.is_empty() {
        None
    } else {
        Some(endpoint.to_string())
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Boot must be `Fn`; the flags are consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Flags::default(), &Config::default())
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::boot(flags, &config, config_warning)
    }

    /// Builds the app from loaded settings and shows the startup toasts: the
    /// settings warning if loading failed, then every flash message in order.
    fn boot(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let mut app = Self::with_config(&flags, config);
        let mut tasks = Vec::new();

        if let Some(key) = config_warning {
            let warning = app.i18n.tr(&key);
            app.diagnostics.record(DiagnosticEventKind::Warning {
                message: warning.clone(),
            });
            tasks.push(notifications::Notifier::notify(
                &mut app.context(),
                warning,
                Severity::Error,
            ));
        }
        tasks.push(notifications::notify_flashes(
            &mut app.context(),
            &flags.flashes,
        ));

        (app, Task::batch(tasks))
    }

    fn with_config(flags: &Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let endpoint = resolve_endpoint(flags.endpoint.as_deref(), config);
        let search = search_bar::State::new(&config.search, endpoint.as_deref(), &i18n);

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            search,
            notifications: notifications::Manager::new(
                config.notifications.timing(),
                config.notifications.max_visible(),
            ),
            diagnostics: DiagnosticsLog::new(config.diagnostics.capacity()),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.notifications
                .subscription()
                .map(Message::Notification),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchBar(search_message) => {
                update::handle_search_message(&mut self.context(), search_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut self.context(), notification_message)
            }
            Message::ExportDiagnostics => {
                let path = paths::get_app_config_dir().map(|dir| dir.join(REPORT_FILE));
                self.export_diagnostics(path.as_deref())
            }
        }
    }

    fn export_diagnostics(&mut self, path: Option<&Path>) -> Task<Message> {
        let (message, severity) =
            update::export_diagnostics(&self.diagnostics, path, &self.i18n);
        notifications::Notifier::notify(&mut self.context(), message, severity)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search: &self.search,
            notifications: &self.notifications,
        })
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            search: &mut self.search,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        }
    }
}
