use async_trait::async_trait;

use super::{EmailMessage, NotificationError, Notifier};

/// Notifier that records each notification in the application log.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError> {
        let recipients: Vec<&str> = message
            .to
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .collect();

        if recipients.is_empty() {
            return Err(NotificationError::NoRecipients);
        }

        tracing::info!(
            "Notification '{}' from {} to {} ({} bytes)",
            message.subject,
            message.from,
            recipients.join(", "),
            message.body.len()
        );

        Ok(())
    }
}
