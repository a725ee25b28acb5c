// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.
//!
//! Notifications carry a [`UiText`](crate::i18n::UiText) key plus Fluent
//! arguments and are translated when drawn, so a language switch also
//! updates toasts already on screen.
//!
//! - [`notification`]: the `Notification` record and its `Severity`
//! - [`manager`]: queueing, expiry and dismissal
//! - [`toast`]: rendering in the bottom-right corner
//!
//! Success and warning toasts expire on their own; errors stay until the
//! user dismisses them. At most three are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
