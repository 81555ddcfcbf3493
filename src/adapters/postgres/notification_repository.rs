//! PostgreSQL implementation of NotificationRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, NotificationId, Timestamp, UserId};
use crate::domain::notification::{Notification, NotificationKind};
use crate::ports::NotificationRepository;

const NOTIFICATION_COLUMNS: &str = "id, user_id, kind, title, body, read, created_at";

/// PostgreSQL implementation of NotificationRepository.
#[derive(Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    /// Creates a new PostgresNotificationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn create(&self, notification: &Notification) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, kind, title, body, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(notification.id().as_uuid())
        .bind(notification.user_id().as_uuid())
        .bind(notification.kind().as_str())
        .bind(notification.title())
        .bind(notification.body())
        .bind(notification.is_read())
        .bind(notification.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert notification: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &NotificationId,
    ) -> Result<Option<Notification>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM notifications WHERE id = $1",
            NOTIFICATION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch notification: {}", e),
            )
        })?;

        row.map(row_to_notification).transpose()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM notifications
            WHERE user_id = $1 AND ($2 = false OR read = false)
            ORDER BY created_at DESC
            "#,
            NOTIFICATION_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list notifications: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_notification).collect()
    }

    async fn unread_count(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND read = false",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count unread notifications: {}", e),
            )
        })?;

        Ok(result.0 as u64)
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE notifications SET read = true WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to mark notification read: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn mark_all_read(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE notifications SET read = true WHERE user_id = $1 AND read = false",
        )
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to mark notifications read: {}", e),
            )
        })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &NotificationId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete notification: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_notification(row: sqlx::postgres::PgRow) -> Result<Notification, DomainError> {
    let kind_str: String = row.get("kind");
    let kind: NotificationKind = kind_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;

    Ok(Notification::reconstitute(
        NotificationId::from_uuid(row.get("id")),
        UserId::from_uuid(row.get("user_id")),
        kind,
        row.get("title"),
        row.get("body"),
        row.get("read"),
        Timestamp::from_datetime(row.get("created_at")),
    ))
}
