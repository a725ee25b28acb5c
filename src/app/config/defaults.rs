// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Prediction service location and request timeout bounds
//! - **Report**: Saving behavior for downloaded reports

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Prediction service used when neither the CLI, the environment nor the
/// config file names one.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the prediction service URL.
pub const ENV_SERVER_URL: &str = "CKD_LENS_SERVER_URL";

/// Smallest accepted request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Largest accepted request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Report Defaults
// ==========================================================================

/// Whether a save dialog is shown before writing a report.
pub const DEFAULT_ASK_LOCATION: bool = false;
