use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Contact message as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub user_id: Option<i64>,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub received_at: DateTime<Utc>,
    pub origin_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a contact message that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub user_id: Option<i64>,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
    pub origin_ip: Option<String>,
    pub user_agent: Option<String>,
}
