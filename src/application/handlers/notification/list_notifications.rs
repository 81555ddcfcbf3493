//! Notification inbox queries.

use std::sync::Arc;

use crate::domain::foundation::Actor;
use crate::domain::notification::Notification;
use crate::ports::NotificationRepository;

/// Handler for a user's own notification inbox.
///
/// Inbox reads degrade to empty on storage failure so the surrounding
/// page still renders.
pub struct ListNotificationsHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl ListNotificationsHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(&self, actor: &Actor, unread_only: bool) -> Vec<Notification> {
        match self
            .notifications
            .list_by_user(&actor.user_id, unread_only)
            .await
        {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, user_id = %actor.user_id, "notification list failed");
                Vec::new()
            }
        }
    }
}

/// Handler for the unread badge count. Degrades to zero on failure.
pub struct UnreadCountHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl UnreadCountHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(&self, actor: &Actor) -> u64 {
        match self.notifications.unread_count(&actor.user_id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, user_id = %actor.user_id, "unread count failed");
                0
            }
        }
    }
}
