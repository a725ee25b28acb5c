// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter implementing the [`PredictionService`] port.
//!
//! Both endpoints take a JSON body. `/predict` answers with the assessment as
//! JSON, `/download_report` with the raw document bytes.
//!
//! [`PredictionService`]: crate::application::port::PredictionService

use std::future::Future;
use std::time::Duration;

use crate::application::port::{PredictionService, ServiceError, ServiceResult};
use crate::domain::patient::FormData;
use crate::domain::prediction::PredictionResult;

/// Path of the assessment endpoint, relative to the base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the report rendering endpoint, relative to the base URL.
pub const DOWNLOAD_REPORT_PATH: &str = "/download_report";

const USER_AGENT: &str = concat!("CKDLens/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed prediction service.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictionService {
    /// Creates a client for the service at `base_url`.
    ///
    /// Without a `timeout` requests wait for as long as the server takes.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> crate::error::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> ServiceResult<reqwest::Response> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "sending request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request rejected");
            return Err(ServiceError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(
        &self,
        form: &FormData,
    ) -> impl Future<Output = ServiceResult<PredictionResult>> + Send {
        async move {
            let response = self.post_json(PREDICT_PATH, form).await?;
            let body = response
                .bytes()
                .await
                .map_err(|e| ServiceError::Body(e.to_string()))?;
            let result: PredictionResult = serde_json::from_slice(&body)
                .map_err(|e| ServiceError::Decode(e.to_string()))?;

            tracing::info!(
                prediction = %result.prediction,
                probability = result.probability,
                "assessment received"
            );
            Ok(result.with_submitted_form(form))
        }
    }

    fn download_report(
        &self,
        prediction: &PredictionResult,
    ) -> impl Future<Output = ServiceResult<Vec<u8>>> + Send {
        async move {
            let response = self.post_json(DOWNLOAD_REPORT_PATH, prediction).await?;
            let document = response
                .bytes()
                .await
                .map_err(|e| ServiceError::Body(e.to_string()))?;

            if document.is_empty() {
                return Err(ServiceError::Body("empty document".to_string()));
            }
            Ok(document.to_vec())
        }
    }
}
