// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the screening session, localization,
//! settings and the prediction service, and translates messages into side
//! effects such as network requests, report files and config persistence.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::session::Session;
use crate::domain::patient::PatientForm;
use crate::i18n::{fluent, I18n, UiText};
use crate::infrastructure::HttpPredictionService;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    session: Session,
    form: PatientForm,
    /// `None` when the HTTP client could not be built; requests then fail
    /// the same way a network error would.
    service: Option<HttpPredictionService>,
    config: config::Config,
    /// Persisted application state (last report directory).
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.session.language())
            .field("has_prediction", &self.session.last_prediction().is_some())
            .field("server", &self.service.as_ref().map(HttpPredictionService::base_url))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
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

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
        Self {
            i18n: I18n::default(),
            session: Session::default(),
            form: PatientForm::new(),
            service: None,
            config: config::Config::default(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Loads settings and state, then builds the HTTP client.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let language =
            fluent::detect_language(flags.lang.as_deref(), config.general.language.as_deref());
        let env_url = std::env::var(config::ENV_SERVER_URL).ok();
        let server_url = config::resolve_server_url(flags.server.as_deref(), env_url.as_deref(), &config);

        let service = match HttpPredictionService::new(&server_url, config.server.timeout()) {
            Ok(service) => Some(service),
            Err(err) => {
                tracing::error!(error = %err, "HTTP client unavailable");
                None
            }
        };
        tracing::info!(server = %server_url, language = language.code(), "starting");

        let mut app = App {
            i18n: I18n::new(language),
            session: Session::new(language),
            service,
            theme_mode: config.general.theme_mode,
            config,
            app_state,
            ..Self::default()
        };

        for warning in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr(UiText::WindowTitle)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            session: &mut self.session,
            form: &mut self.form,
            service: self.service.as_ref(),
            config: &mut self.config,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::LanguageBar(message) => update::handle_language_bar(&mut ctx, message),
            Message::Form(message) => update::handle_form(&mut ctx, message),
            Message::ResultPanel(message) => update::handle_result_panel(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::PredictionCompleted(outcome) => {
                update::handle_prediction_completed(&mut ctx, outcome)
            }
            Message::AlertClosed => Task::none(),
            Message::ReportReady(artifact) => update::handle_report_ready(&mut ctx, artifact),
            Message::ReportDestinationChosen { artifact, path } => {
                update::handle_report_destination(&mut ctx, artifact, path)
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            form: &self.form,
            notifications: &self.notifications,
        })
    }
}
