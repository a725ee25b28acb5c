// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Startup language from CLI, config, or system locale
//! - English, Kannada and Hindi bundles embedded in the binary
//! - Runtime language switching
//! - Typed message keys ([`UiText`]) checked against every bundle in tests

pub mod fluent;
pub mod keys;

pub use fluent::I18n;
pub use keys::UiText;
