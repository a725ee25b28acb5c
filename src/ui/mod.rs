// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` type and a `view` taking a borrowed context, and the
//! application maps their messages into its own.
//!
//! - [`form`] - Patient form with the submit button
//! - [`result_panel`] - Assessment card with report download
//! - [`language_bar`] - Language selector
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod form;
pub mod language_bar;
pub mod notifications;
pub mod result_panel;
pub mod styles;
pub mod theming;
