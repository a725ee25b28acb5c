// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the file system side of saving reports.
//!
//! # Available Adapters
//!
//! - [`http`]: Prediction service over HTTP (implements [`PredictionService`])
//! - [`files`]: Report directory resolution and artifact writing
//!
//! [`PredictionService`]: crate::application::port::PredictionService

pub mod files;
pub mod http;

pub use http::HttpPredictionService;
