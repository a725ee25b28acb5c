// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`prediction`]: Risk prediction and server-side report rendering
//!
//! # Design Notes
//!
//! - Traits use domain types only (no `reqwest` types)
//! - Methods return `Send` futures so callers can hand them to Iced's `Task::perform`
//!
//! # Example
//!
//! ```ignore
//! use ckd_lens::application::port::PredictionService;
//! use ckd_lens::domain::patient::FormData;
//!
//! async fn risk_label(service: &impl PredictionService, form: &FormData) -> Option<String> {
//!     service.predict(form).await.ok().map(|result| result.prediction)
//! }
//! ```

pub mod prediction;

pub use prediction::{PredictionService, ServiceError, ServiceResult};
