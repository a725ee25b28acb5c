// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::i18n::UiText;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 4s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 6s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(4)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The text is resolved at render time so it follows language switches.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: UiText,
    args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: UiText) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message,
            args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: UiText) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: UiText) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: UiText) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Adds a Fluent variable for the message.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> UiText {
        self.message
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Returns whether the notification has been shown long enough at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success(UiText::ReportSaved);
        let n2 = Notification::success(UiText::ReportSaved);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn error_never_expires() {
        let notification = Notification::error(UiText::ReportSaveError);
        let far_future = Instant::now() + Duration::from_secs(3600);
        assert!(!notification.is_expired_at(far_future));
    }

    #[test]
    fn success_expires_after_its_duration() {
        let notification = Notification::success(UiText::ReportSaved);
        let now = Instant::now();
        assert!(!notification.is_expired_at(now));
        assert!(notification.is_expired_at(now + Duration::from_secs(5)));
    }

    #[test]
    fn warning_stays_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn arguments_are_kept_in_order() {
        let notification = Notification::warning(UiText::InvalidFields)
            .with_arg("fields", "Hemoglobin")
            .with_arg("extra", "1");
        assert_eq!(notification.message(), UiText::InvalidFields);
        assert_eq!(notification.args()[0], ("fields".to_string(), "Hemoglobin".to_string()));
        assert_eq!(notification.args().len(), 2);
    }
}
