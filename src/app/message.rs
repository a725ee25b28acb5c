// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ServiceError;
use crate::domain::prediction::PredictionResult;
use crate::domain::report::ReportArtifact;
use crate::ui::notifications;
use crate::ui::{form, language_bar, result_panel};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through a single entry point.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageBar(language_bar::Message),
    Form(form::Message),
    ResultPanel(result_panel::Message),
    Notification(notifications::NotificationMessage),
    /// The `/predict` request finished.
    PredictionCompleted(Result<PredictionResult, ServiceError>),
    /// The failure alert was closed.
    AlertClosed,
    /// A report is ready, from the server or built locally.
    ReportReady(ReportArtifact),
    /// Result of the save dialog; `None` when the user cancelled.
    ReportDestinationChosen {
        artifact: ReportArtifact,
        path: Option<PathBuf>,
    },
    /// Periodic tick for toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Language code override (`en`, `kn`, `hi`).
    pub lang: Option<String>,
    /// Prediction service base URL override.
    pub server: Option<String>,
    /// Data directory override (for state files).
    /// Takes precedence over `CKD_LENS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over `CKD_LENS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
