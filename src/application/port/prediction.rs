// SPDX-License-Identifier: MPL-2.0
//! Prediction service port definition.
//!
//! This module defines the [`PredictionService`] trait covering the two calls
//! the client makes: submitting the form for a risk assessment and asking the
//! server to render that assessment as a document.

use crate::domain::patient::FormData;
use crate::domain::prediction::PredictionResult;
use std::future::Future;

// =============================================================================
// ServiceError
// =============================================================================

/// Errors that can occur while talking to the prediction service.
///
/// Callers do not distinguish between variants when reacting; they exist for
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response could not be decoded: {0}")]
    Decode(String),

    /// The response body could not be read, or was empty.
    #[error("response body unusable: {0}")]
    Body(String),
}

/// Result type for service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// PredictionService
// =============================================================================

/// Remote service producing risk assessments and report documents.
pub trait PredictionService: Send + Sync {
    /// Submits the form fields and returns the assessment.
    ///
    /// The returned result always carries the submitted fields in
    /// `form_data`, echoed by the server or filled in by the client.
    fn predict(
        &self,
        form: &FormData,
    ) -> impl Future<Output = ServiceResult<PredictionResult>> + Send;

    /// Sends a previous assessment back and returns the rendered document.
    fn download_report(
        &self,
        prediction: &PredictionResult,
    ) -> impl Future<Output = ServiceResult<Vec<u8>>> + Send;
}
