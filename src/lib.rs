// SPDX-License-Identifier: MPL-2.0
//! `ckd_lens` is a desktop client for a chronic kidney disease risk
//! prediction service, built with the Iced GUI framework.
//!
//! It collects clinical values, submits them to the service, shows the
//! returned assessment in English, Kannada or Hindi, and saves a report:
//! the server-rendered PDF, or a plain-text summary when the server cannot
//! produce one.

#![doc(html_root_url = "https://docs.rs/ckd_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
