use async_trait::async_trait;
use sqlx::PgPool;

use super::{ContactReader, ContactWriter};
use crate::features::contacts::models::{ContactMessage, NewContactMessage};
use crate::shared::storage::StorageError;

/// PostgreSQL-backed contact message storage
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactReader for PgContactRepository {
    async fn list(&self) -> Result<Vec<ContactMessage>, StorageError> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, user_id, sender_name, sender_email, sender_phone, subject, message,
                   is_read, received_at, origin_ip, user_agent, created_at, updated_at
            FROM contact_messages
            ORDER BY received_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("list contact messages", "*", e))
    }

    async fn get_by_id(&self, id: i64) -> Result<ContactMessage, StorageError> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, user_id, sender_name, sender_email, sender_phone, subject, message,
                   is_read, received_at, origin_ip, user_agent, created_at, updated_at
            FROM contact_messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("get contact message by id", id, e))
    }
}

#[async_trait]
impl ContactWriter for PgContactRepository {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, StorageError> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (
                user_id, sender_name, sender_email, sender_phone, subject, message,
                received_at, origin_ip, user_agent
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, sender_name, sender_email, sender_phone, subject, message,
                      is_read, received_at, origin_ip, user_agent, created_at, updated_at
            "#,
        )
        .bind(message.user_id)
        .bind(&message.sender_name)
        .bind(&message.sender_email)
        .bind(&message.sender_phone)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.received_at)
        .bind(&message.origin_ip)
        .bind(&message.user_agent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("insert contact message", &message.sender_email, e))
    }

    async fn mark_as_read(&self, id: i64) -> Result<ContactMessage, StorageError> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages
            SET is_read = TRUE, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, sender_name, sender_email, sender_phone, subject, message,
                      is_read, received_at, origin_ip, user_agent, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("mark contact message as read", id, e))
    }
}
