//! Notification repository port.

use crate::domain::foundation::{DomainError, NotificationId, UserId};
use crate::domain::notification::Notification;
use async_trait::async_trait;

/// Repository port for notification persistence.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Inserts a new notification.
    async fn create(&self, notification: &Notification) -> Result<(), DomainError>;

    /// Finds a notification by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &NotificationId)
        -> Result<Option<Notification>, DomainError>;

    /// Lists a user's notifications, newest first.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DomainError>;

    /// Counts a user's unread notifications.
    async fn unread_count(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Marks one notification read.
    ///
    /// # Errors
    ///
    /// - `NotificationNotFound` if it doesn't exist
    async fn mark_read(&self, id: &NotificationId) -> Result<(), DomainError>;

    /// Marks all of a user's notifications read. Returns how many changed.
    async fn mark_all_read(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Deletes a notification.
    ///
    /// # Errors
    ///
    /// - `NotificationNotFound` if it doesn't exist
    async fn delete(&self, id: &NotificationId) -> Result<(), DomainError>;
}
