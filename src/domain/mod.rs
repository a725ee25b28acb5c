// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules of the screening client.
//!
//! This module contains pure value types with no I/O. The only external
//! dependency is `serde`, used for the wire representation of form data and
//! prediction results.
//!
//! # Modules
//!
//! - [`language`]: Supported UI languages ([`Language`](language::Language))
//! - [`patient`]: Form fields and submitted values ([`FormField`](patient::FormField),
//!   [`FormData`](patient::FormData), [`PatientForm`](patient::PatientForm))
//! - [`prediction`]: Backend result ([`PredictionResult`](prediction::PredictionResult),
//!   [`RiskLevel`](prediction::RiskLevel))
//! - [`report`]: Report artifacts and the download state machine
//!   ([`ReportArtifact`](report::ReportArtifact), [`DownloadState`](report::DownloadState))

pub mod language;
pub mod patient;
pub mod prediction;
pub mod report;
