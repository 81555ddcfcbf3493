//! Read-state and deletion commands for the notification inbox.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, NotificationId};
use crate::ports::NotificationRepository;

/// Handler marking one notification read. Only the recipient (or an
/// admin) may touch it.
pub struct MarkNotificationReadHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl MarkNotificationReadHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(&self, id: NotificationId, actor: &Actor) -> Result<(), DomainError> {
        let notification = self.notifications.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", id),
            )
        })?;
        actor.check_can_manage(notification.user_id())?;

        self.notifications.mark_read(&id).await
    }
}

/// Handler marking the caller's entire inbox read.
pub struct MarkAllReadHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl MarkAllReadHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    /// Returns how many notifications changed state.
    pub async fn handle(&self, actor: &Actor) -> Result<u64, DomainError> {
        let changed = self.notifications.mark_all_read(&actor.user_id).await?;
        tracing::debug!(user_id = %actor.user_id, changed, "inbox marked read");
        Ok(changed)
    }
}

/// Handler deleting one notification from the inbox.
pub struct DeleteNotificationHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl DeleteNotificationHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(&self, id: NotificationId, actor: &Actor) -> Result<(), DomainError> {
        let notification = self.notifications.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", id),
            )
        })?;
        actor.check_can_manage(notification.user_id())?;

        self.notifications.delete(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::notification::tests::MockNotificationRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::notification::{Notification, NotificationKind};

    fn notification_for(user_id: UserId) -> Notification {
        Notification::new(
            NotificationId::new(),
            user_id,
            NotificationKind::TicketReply,
            "Reply".into(),
            "An admin replied to your ticket.".into(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn recipient_can_mark_their_notification_read() {
        let me = UserId::new();
        let notification = notification_for(me);
        let id = *notification.id();
        let repo = Arc::new(MockNotificationRepository::with(vec![notification]));

        MarkNotificationReadHandler::new(repo.clone())
            .handle(id, &Actor::new(me, Role::User))
            .await
            .unwrap();

        assert!(repo.all()[0].is_read());
    }

    #[tokio::test]
    async fn strangers_cannot_touch_someone_elses_inbox() {
        let notification = notification_for(UserId::new());
        let id = *notification.id();
        let repo = Arc::new(MockNotificationRepository::with(vec![notification]));

        let err = MarkNotificationReadHandler::new(repo)
            .handle(id, &Actor::new(UserId::new(), Role::User))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn mark_all_read_reports_how_many_changed() {
        let me = UserId::new();
        let repo = Arc::new(MockNotificationRepository::with(vec![
            notification_for(me),
            notification_for(me),
            notification_for(UserId::new()),
        ]));

        let changed = MarkAllReadHandler::new(repo.clone())
            .handle(&Actor::new(me, Role::User))
            .await
            .unwrap();
        assert_eq!(changed, 2);
    }

    #[tokio::test]
    async fn delete_removes_the_notification() {
        let me = UserId::new();
        let notification = notification_for(me);
        let id = *notification.id();
        let repo = Arc::new(MockNotificationRepository::with(vec![notification]));

        DeleteNotificationHandler::new(repo.clone())
            .handle(id, &Actor::new(me, Role::User))
            .await
            .unwrap();
        assert!(repo.all().is_empty());
    }
}
