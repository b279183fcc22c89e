//! Outbound notifications
//!
//! Services depend on the [`Notifier`] capability only. Delivery is
//! best-effort from the caller's point of view: a failed notification never
//! undoes the write that triggered it.

mod log_notifier;

use async_trait::async_trait;
use thiserror::Error;

pub use log_notifier::LogNotifier;

/// An email-shaped notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: Vec<String>,
    pub from: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification has no recipients")]
    NoRecipients,

    /// Raised by delivery channels that talk to a remote server.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Capability to hand a notification to a delivery channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError>;
}
