use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::extractor::ClientInfo;
use crate::features::contacts::models::ContactMessage;
use crate::features::contacts::services::ContactSubmission;

/// Contact form submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestDto {
    /// Sender name (2-150 characters)
    #[validate(required, length(min = 2, max = 150))]
    #[schema(example = "Ana Torres")]
    pub name: Option<String>,

    #[validate(required, email, length(max = 255))]
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,

    /// Optional phone number (7-30 characters)
    #[validate(length(min = 7, max = 30))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub subject: Option<String>,

    /// Message body (at least 10 characters)
    #[validate(required, length(min = 10))]
    pub message: Option<String>,
}

impl ContactRequestDto {
    pub fn into_submission(self, client: ClientInfo) -> ContactSubmission {
        ContactSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            subject: self.subject,
            message: self.message.unwrap_or_default(),
            user_id: None,
            origin_ip: client.ip,
            user_agent: client.user_agent,
        }
    }
}

/// Acknowledgement returned after a submission is stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmittedDto {
    pub id: i64,
    #[schema(example = "received")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&ContactMessage> for ContactSubmittedDto {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.id,
            status: "received".to_string(),
            timestamp: m.received_at,
        }
    }
}

/// Response DTO for contact message (admin view)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageResponseDto {
    pub id: i64,
    pub user_id: Option<i64>,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub received_at: DateTime<Utc>,
    pub origin_ip: Option<String>,
    pub user_agent: Option<String>,
}

impl From<ContactMessage> for ContactMessageResponseDto {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            sender_name: m.sender_name,
            sender_email: m.sender_email,
            sender_phone: m.sender_phone,
            subject: m.subject,
            message: m.message,
            read: m.is_read,
            received_at: m.received_at,
            origin_ip: m.origin_ip,
            user_agent: m.user_agent,
        }
    }
}
