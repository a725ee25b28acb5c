// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{config, persisted_state::AppState, Message};
use crate::application::port::{PredictionService, ServiceError};
use crate::application::report;
use crate::application::session::Session;
use crate::domain::patient::PatientForm;
use crate::domain::prediction::PredictionResult;
use crate::domain::report::ReportArtifact;
use crate::i18n::{I18n, UiText};
use crate::infrastructure::{files, HttpPredictionService};
use crate::ui::notifications::{self, Notification};
use crate::ui::result_panel;
use crate::ui::{form, language_bar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub session: &'a mut Session,
    pub form: &'a mut PatientForm,
    pub service: Option<&'a HttpPredictionService>,
    pub config: &'a mut config::Config,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_language_bar(
    ctx: &mut UpdateContext<'_>,
    message: language_bar::Message,
) -> Task<Message> {
    let language_bar::Message::Selected(language) = message;
    if language == ctx.session.language() {
        return Task::none();
    }

    ctx.i18n.set_language(language);
    ctx.session.set_language(language);
    ctx.config.general.language = Some(language.code().to_string());
    tracing::info!(language = language.code(), "language changed");

    persist_config(ctx);
    Task::none()
}

pub fn handle_form(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    if ctx.session.is_prediction_pending() {
        tracing::debug!("form locked while a prediction is pending");
        return Task::none();
    }

    match form::update(message, ctx.form) {
        form::Event::None => Task::none(),
        form::Event::SubmitRequested => submit_prediction(ctx),
    }
}

fn submit_prediction(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let invalid = ctx.form.invalid_fields();
    if !invalid.is_empty() {
        let names = invalid
            .iter()
            .map(|field| ctx.i18n.tr(UiText::field_label(*field)))
            .collect::<Vec<_>>()
            .join(", ");
        ctx.notifications
            .push(Notification::warning(UiText::InvalidFields).with_arg("fields", names));
        return Task::none();
    }

    if !ctx.session.begin_prediction() {
        return Task::none();
    }

    let form_data = ctx.form.to_form_data();
    tracing::debug!(fields = form_data.len(), "submitting form");

    match ctx.service.cloned() {
        Some(service) => Task::perform(
            async move { service.predict(&form_data).await },
            Message::PredictionCompleted,
        ),
        None => Task::done(Message::PredictionCompleted(Err(ServiceError::Transport(
            "HTTP client unavailable".to_string(),
        )))),
    }
}

pub fn handle_prediction_completed(
    ctx: &mut UpdateContext<'_>,
    outcome: Result<PredictionResult, ServiceError>,
) -> Task<Message> {
    match ctx.session.finish_prediction(outcome) {
        Ok(prediction) => {
            tracing::debug!(label = %prediction.prediction, "showing assessment");
            result_panel::reveal()
        }
        Err(err) => {
            tracing::warn!(error = %err, "prediction request failed");
            show_failure_alert(ctx.i18n)
        }
    }
}

/// Blocking alert for a failed prediction request.
fn show_failure_alert(i18n: &I18n) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let title = i18n.tr(UiText::AlertTitle);
    let description = i18n.tr(UiText::AlertRequestFailed);
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::AlertClosed,
    )
}

pub fn handle_result_panel(
    ctx: &mut UpdateContext<'_>,
    message: result_panel::Message,
) -> Task<Message> {
    match message {
        result_panel::Message::DownloadReport => start_download(ctx),
        result_panel::Message::NewAssessment => {
            if ctx.session.is_prediction_pending() {
                return Task::none();
            }
            ctx.session.reset();
            *ctx.form = PatientForm::new();
            operation::snap_to(
                Id::new(result_panel::PAGE_SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y: 0.0 },
            )
        }
    }
}

fn start_download(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(prediction) = ctx.session.begin_download() else {
        tracing::debug!("download ignored: no assessment or download running");
        return Task::none();
    };

    let now = chrono::Local::now();
    match ctx.service.cloned() {
        Some(service) => Task::perform(
            async move { report::fetch_report(&service, &prediction, now).await },
            Message::ReportReady,
        ),
        None => Task::done(Message::ReportReady(report::text_report(&prediction, now))),
    }
}

pub fn handle_report_ready(ctx: &mut UpdateContext<'_>, artifact: ReportArtifact) -> Task<Message> {
    ctx.session.finish_download(artifact.kind);

    if ctx.config.report.ask_location.unwrap_or(config::DEFAULT_ASK_LOCATION) {
        return ask_report_destination(ctx, artifact);
    }

    let dir = files::report_directory(ctx.config.report.output_dir.as_deref());
    match files::save_artifact(&dir, &artifact) {
        Ok(path) => report_saved(ctx, &artifact, path),
        Err(err) => {
            tracing::error!(dir = %dir.display(), error = %err, "report not saved");
            ctx.notifications
                .push(Notification::error(UiText::ReportSaveError));
        }
    }
    Task::none()
}

fn ask_report_destination(ctx: &UpdateContext<'_>, artifact: ReportArtifact) -> Task<Message> {
    let start_dir = ctx
        .app_state
        .last_report_directory
        .clone()
        .filter(|dir| dir.exists())
        .unwrap_or_else(|| files::report_directory(ctx.config.report.output_dir.as_deref()));

    let dialog = rfd::AsyncFileDialog::new()
        .set_file_name(&artifact.file_name)
        .add_filter(artifact.kind.extension(), &[artifact.kind.extension()])
        .set_directory(&start_dir);

    Task::perform(
        async move { dialog.save_file().await.map(|handle| handle.path().to_path_buf()) },
        move |path| Message::ReportDestinationChosen { artifact, path },
    )
}

pub fn handle_report_destination(
    ctx: &mut UpdateContext<'_>,
    artifact: ReportArtifact,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        tracing::info!(file = %artifact.file_name, "report save cancelled");
        return Task::none();
    };

    match files::write_artifact_to(&path, &artifact) {
        Ok(()) => report_saved(ctx, &artifact, path),
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "report not saved");
            ctx.notifications
                .push(Notification::error(UiText::ReportSaveError));
        }
    }
    Task::none()
}

fn report_saved(ctx: &mut UpdateContext<'_>, artifact: &ReportArtifact, path: PathBuf) {
    let message = if artifact.is_fallback() {
        UiText::ReportSavedText
    } else {
        UiText::ReportSaved
    };
    ctx.notifications.push(
        Notification::success(message).with_arg("path", path.display().to_string()),
    );

    ctx.app_state.set_last_report_directory_from_file(&path);
    persist_state(ctx);
}

/// Writes `settings.toml`. Skipped in unit tests to keep them isolated.
fn persist_config(ctx: &mut UpdateContext<'_>) {
    if cfg!(test) {
        return;
    }
    if let Err(err) = config::save(ctx.config) {
        tracing::warn!(error = %err, "settings not saved");
        ctx.notifications
            .push(Notification::warning(UiText::ConfigSaveError));
    }
}

/// Writes `state.cbor`. Skipped in unit tests to keep them isolated.
fn persist_state(ctx: &mut UpdateContext<'_>) {
    if cfg!(test) {
        return;
    }
    if let Some(warning) = ctx.app_state.save() {
        ctx.notifications.push(Notification::warning(warning));
    }
}
