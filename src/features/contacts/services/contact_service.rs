use std::sync::Arc;

use chrono::Utc;
use validator::ValidateEmail;

use crate::core::config::ContactConfig;
use crate::features::contacts::errors::ContactError;
use crate::features::contacts::models::{ContactMessage, NewContactMessage};
use crate::features::contacts::repositories::{ContactReader, ContactWriter};
use crate::modules::notifications::{EmailMessage, Notifier};
use crate::shared::storage::StorageError;

const MAX_EMAIL_CHARS: usize = 255;
const MAX_SUBJECT_CHARS: usize = 255;
const MIN_PHONE_CHARS: usize = 7;
const MAX_PHONE_CHARS: usize = 30;

/// A contact form submission together with request metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub user_id: Option<i64>,
    pub origin_ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Service for contact message operations
pub struct ContactService {
    reader: Arc<dyn ContactReader>,
    writer: Arc<dyn ContactWriter>,
    notifier: Arc<dyn Notifier>,
    config: ContactConfig,
}

impl ContactService {
    pub fn new(
        reader: Arc<dyn ContactReader>,
        writer: Arc<dyn ContactWriter>,
        notifier: Arc<dyn Notifier>,
        config: ContactConfig,
    ) -> Self {
        Self {
            reader,
            writer,
            notifier,
            config,
        }
    }

    /// Validate and store a submission, then notify the administrator.
    ///
    /// A failed notification is logged and does not fail the submission.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactMessage, ContactError> {
        validate(&submission)?;

        let new_message = NewContactMessage {
            user_id: submission.user_id,
            sender_name: submission.name.trim().to_string(),
            sender_email: submission.email.trim().to_string(),
            sender_phone: non_blank(submission.phone),
            subject: non_blank(submission.subject),
            message: submission.message.trim().to_string(),
            received_at: Utc::now(),
            origin_ip: submission.origin_ip,
            user_agent: submission.user_agent,
        };

        let saved = self
            .writer
            .create(new_message)
            .await
            .map_err(|e| ContactError::storage("save contact message", e))?;

        tracing::info!(
            "Contact message {} received from {}",
            saved.id,
            saved.sender_email
        );

        if let Err(e) = self.notifier.send(self.admin_notification(&saved)).await {
            tracing::warn!(
                "Contact message {} stored but admin notification failed: {}",
                saved.id,
                e
            );
        }

        Ok(saved)
    }

    /// List all messages, most recently received first
    pub async fn list(&self) -> Result<Vec<ContactMessage>, ContactError> {
        self.reader
            .list()
            .await
            .map_err(|e| ContactError::storage("list contact messages", e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ContactMessage, ContactError> {
        self.reader.get_by_id(id).await.map_err(|e| match e {
            StorageError::NotFound => ContactError::NotFound,
            other => ContactError::storage("load contact message", other),
        })
    }

    /// Mark a message as read. Marking an already read message is a no-op.
    pub async fn mark_as_read(&self, id: i64) -> Result<ContactMessage, ContactError> {
        let message = self.get_by_id(id).await?;
        if message.is_read {
            return Ok(message);
        }

        let updated = self.writer.mark_as_read(id).await.map_err(|e| match e {
            StorageError::NotFound => ContactError::NotFound,
            other => ContactError::storage("mark contact message as read", other),
        })?;

        tracing::info!("Contact message {} marked as read", id);
        Ok(updated)
    }

    fn admin_notification(&self, message: &ContactMessage) -> EmailMessage {
        let subject = match &message.subject {
            Some(subject) => format!("New contact message: {}", subject),
            None => "New contact message".to_string(),
        };

        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\nReceived: {}\n\n{}",
            message.sender_name,
            message.sender_email,
            message.sender_phone.as_deref().unwrap_or("-"),
            message.received_at.to_rfc3339(),
            message.message
        );

        EmailMessage {
            to: vec![self.config.admin_email.clone()],
            from: self.config.from_email.clone(),
            subject,
            body,
        }
    }
}

fn validate(submission: &ContactSubmission) -> Result<(), ContactError> {
    if submission.name.trim().is_empty() {
        return Err(ContactError::EmptyName);
    }

    let email = submission.email.trim();
    if email.is_empty() || email.chars().count() > MAX_EMAIL_CHARS || !email.validate_email() {
        return Err(ContactError::InvalidEmail);
    }

    if submission.message.trim().is_empty() {
        return Err(ContactError::EmptyMessage);
    }

    if let Some(subject) = &submission.subject {
        if subject.trim().chars().count() > MAX_SUBJECT_CHARS {
            return Err(ContactError::SubjectTooLong);
        }
    }

    if let Some(phone) = submission.phone.as_deref().map(str::trim) {
        let len = phone.chars().count();
        if !phone.is_empty() && !(MIN_PHONE_CHARS..=MAX_PHONE_CHARS).contains(&len) {
            return Err(ContactError::Invalid);
        }
    }

    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::features::contacts::repositories::{MockContactReader, MockContactWriter};
    use crate::modules::notifications::{MockNotifier, NotificationError};
    use crate::shared::errors::ErrorClass;

    fn config() -> ContactConfig {
        ContactConfig {
            admin_email: "admin@recipes.test".to_string(),
            from_email: "noreply@recipes.test".to_string(),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            subject: Some("Recipe question".to_string()),
            message: "How long should the flan rest?".to_string(),
            ..Default::default()
        }
    }

    /// Syntactically valid address of about 300 characters.
    fn long_valid_email() -> String {
        let label = "b".repeat(60);
        format!(
            "{}@{}.{}.{}.{}.com",
            "a".repeat(64),
            label,
            label,
            label,
            "c".repeat(50)
        )
    }

    fn stored(id: i64, new_message: NewContactMessage) -> ContactMessage {
        ContactMessage {
            id,
            user_id: new_message.user_id,
            sender_name: new_message.sender_name,
            sender_email: new_message.sender_email,
            sender_phone: new_message.sender_phone,
            subject: new_message.subject,
            message: new_message.message,
            is_read: false,
            received_at: new_message.received_at,
            origin_ip: new_message.origin_ip,
            user_agent: new_message.user_agent,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn saving_writer() -> MockContactWriter {
        let mut writer = MockContactWriter::new();
        writer
            .expect_create()
            .times(1)
            .returning(|m| Ok(stored(1, m)));
        writer
    }

    fn rejecting_writer() -> MockContactWriter {
        let mut writer = MockContactWriter::new();
        writer.expect_create().never();
        writer
    }

    fn service(writer: MockContactWriter, notifier: MockNotifier) -> ContactService {
        service_with_reader(MockContactReader::new(), writer, notifier)
    }

    fn service_with_reader(
        reader: MockContactReader,
        writer: MockContactWriter,
        notifier: MockNotifier,
    ) -> ContactService {
        ContactService::new(
            Arc::new(reader),
            Arc::new(writer),
            Arc::new(notifier),
            config(),
        )
    }

    fn silent_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();
        notifier
    }

    #[tokio::test]
    async fn test_submit_stores_and_notifies_admin() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .withf(|m: &EmailMessage| {
                m.to == vec!["admin@recipes.test".to_string()]
                    && m.from == "noreply@recipes.test"
                    && m.subject == "New contact message: Recipe question"
                    && m.body.contains("ana@example.com")
            })
            .times(1)
            .returning(|_| Ok(()));

        let saved = service(saving_writer(), notifier)
            .submit(submission())
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert!(!saved.is_read);
    }

    #[tokio::test]
    async fn test_notification_failure_does_not_fail_submission() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .times(1)
            .returning(|_| Err(NotificationError::Delivery("smtp unavailable".to_string())));

        let result = service(saving_writer(), notifier).submit(submission()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_before_storage() {
        let input = ContactSubmission {
            name: "  ".to_string(),
            ..submission()
        };

        let result = service(rejecting_writer(), silent_notifier())
            .submit(input)
            .await;
        assert!(matches!(result, Err(ContactError::EmptyName)));
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        for email in ["", "   ", "ana.example.com", "ana@"] {
            let input = ContactSubmission {
                email: email.to_string(),
                ..submission()
            };

            let result = service(rejecting_writer(), silent_notifier())
                .submit(input)
                .await;
            assert!(
                matches!(result, Err(ContactError::InvalidEmail)),
                "email {email:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_email_longer_than_column_is_rejected() {
        let email = long_valid_email();
        assert!(email.chars().count() > MAX_EMAIL_CHARS);

        let input = ContactSubmission {
            email,
            ..submission()
        };

        let result = service(rejecting_writer(), silent_notifier())
            .submit(input)
            .await;
        assert!(matches!(result, Err(ContactError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let input = ContactSubmission {
            message: "\n\t".to_string(),
            ..submission()
        };

        let error = service(rejecting_writer(), silent_notifier())
            .submit(input)
            .await
            .unwrap_err();
        assert!(matches!(error, ContactError::EmptyMessage));
        assert_eq!(error.class(), Some(ErrorClass::InvalidInput));
    }

    #[tokio::test]
    async fn test_long_subject_is_rejected() {
        let input = ContactSubmission {
            subject: Some("a".repeat(MAX_SUBJECT_CHARS + 1)),
            ..submission()
        };

        let result = service(rejecting_writer(), silent_notifier())
            .submit(input)
            .await;
        assert!(matches!(result, Err(ContactError::SubjectTooLong)));
    }

    #[tokio::test]
    async fn test_subject_at_limit_is_accepted() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_| Ok(()));

        let input = ContactSubmission {
            subject: Some("á".repeat(MAX_SUBJECT_CHARS)),
            ..submission()
        };

        assert!(service(saving_writer(), notifier).submit(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_short_phone_is_invalid() {
        let input = ContactSubmission {
            phone: Some("123".to_string()),
            ..submission()
        };

        let result = service(rejecting_writer(), silent_notifier())
            .submit(input)
            .await;
        assert!(matches!(result, Err(ContactError::Invalid)));
    }

    #[tokio::test]
    async fn test_blank_optional_fields_are_stored_as_absent() {
        let mut writer = MockContactWriter::new();
        writer
            .expect_create()
            .withf(|m: &NewContactMessage| m.sender_phone.is_none() && m.subject.is_none())
            .times(1)
            .returning(|m| Ok(stored(2, m)));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .withf(|m: &EmailMessage| m.subject == "New contact message")
            .returning(|_| Ok(()));

        let input = ContactSubmission {
            phone: Some("   ".to_string()),
            subject: Some(String::new()),
            ..submission()
        };

        assert!(service(writer, notifier).submit(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_message_is_not_found() {
        let mut reader = MockContactReader::new();
        reader
            .expect_get_by_id()
            .returning(|_| Err(StorageError::NotFound));

        let result = service_with_reader(reader, MockContactWriter::new(), silent_notifier())
            .get_by_id(77)
            .await;
        assert!(matches!(result, Err(ContactError::NotFound)));
    }

    #[tokio::test]
    async fn test_mark_as_read_on_read_message_is_noop() {
        let mut reader = MockContactReader::new();
        reader.expect_get_by_id().returning(|id| {
            let mut message = stored(
                id,
                NewContactMessage {
                    user_id: None,
                    sender_name: "Ana".to_string(),
                    sender_email: "ana@example.com".to_string(),
                    sender_phone: None,
                    subject: None,
                    message: "Hello there".to_string(),
                    received_at: Utc::now(),
                    origin_ip: None,
                    user_agent: None,
                },
            );
            message.is_read = true;
            Ok(message)
        });
        let mut writer = MockContactWriter::new();
        writer.expect_mark_as_read().never();

        let message = service_with_reader(reader, writer, silent_notifier())
            .mark_as_read(3)
            .await
            .unwrap();
        assert!(message.is_read);
    }

    #[tokio::test]
    async fn test_mark_as_read_missing_message_is_not_found() {
        let mut reader = MockContactReader::new();
        reader
            .expect_get_by_id()
            .returning(|_| Err(StorageError::NotFound));
        let mut writer = MockContactWriter::new();
        writer.expect_mark_as_read().never();

        let result = service_with_reader(reader, writer, silent_notifier())
            .mark_as_read(3)
            .await;
        assert!(matches!(result, Err(ContactError::NotFound)));
    }
}
