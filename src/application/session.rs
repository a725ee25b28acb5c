// SPDX-License-Identifier: MPL-2.0
//! State of one screening session.
//!
//! [`Session`] owns everything that outlives a single message: the active
//! language, the most recent assessment, and whether a prediction request or
//! a report download is in flight. The application holds exactly one session
//! and passes it explicitly to the code that renders or downloads.

use super::port::ServiceError;
use crate::domain::language::Language;
use crate::domain::prediction::PredictionResult;
use crate::domain::report::{DownloadState, ReportKind};

#[derive(Debug, Clone, Default)]
pub struct Session {
    language: Language,
    last_prediction: Option<PredictionResult>,
    prediction_pending: bool,
    download: DownloadState,
}

impl Session {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The assessment currently displayed, if any.
    #[must_use]
    pub fn last_prediction(&self) -> Option<&PredictionResult> {
        self.last_prediction.as_ref()
    }

    #[must_use]
    pub fn is_prediction_pending(&self) -> bool {
        self.prediction_pending
    }

    #[must_use]
    pub fn download_state(&self) -> DownloadState {
        self.download
    }

    /// Marks a prediction request as started.
    ///
    /// Returns `false` when one is already pending; the caller must not send
    /// another request.
    pub fn begin_prediction(&mut self) -> bool {
        if self.prediction_pending {
            return false;
        }
        self.prediction_pending = true;
        true
    }

    /// Records the outcome of the pending prediction request.
    ///
    /// A success replaces the displayed assessment and re-arms the download.
    /// A failure leaves the previous assessment in place. In both cases the
    /// form becomes usable again.
    pub fn finish_prediction(
        &mut self,
        outcome: Result<PredictionResult, ServiceError>,
    ) -> Result<&PredictionResult, ServiceError> {
        self.prediction_pending = false;
        let prediction = outcome?;
        self.download = DownloadState::Idle;
        Ok(self.last_prediction.insert(prediction))
    }

    /// Starts a report download for the displayed assessment.
    ///
    /// Returns the assessment to send, or `None` when there is nothing to
    /// download yet or a download is already running.
    pub fn begin_download(&mut self) -> Option<PredictionResult> {
        let prediction = self.last_prediction.clone()?;
        if !self.download.begin() {
            return None;
        }
        Some(prediction)
    }

    /// Records which kind of report the running download produced.
    pub fn finish_download(&mut self, kind: ReportKind) {
        self.download.finish(kind);
    }

    /// Clears the assessment for a new patient.
    ///
    /// The language and a pending prediction request are kept; the request
    /// still owns the form until its response arrives.
    pub fn reset(&mut self) {
        *self = Self {
            language: self.language,
            prediction_pending: self.prediction_pending,
            ..Self::default()
        };
    }
}
