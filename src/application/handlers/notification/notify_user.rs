//! NotifyUserHandler - creates an in-app notification for one user.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, NotificationId};
use crate::domain::notification::{Notification, NotificationKind};
use crate::ports::NotificationRepository;

/// Command to send a notification. Admin only when issued directly;
/// other handlers create notifications internally without going
/// through this command.
#[derive(Debug, Clone)]
pub struct NotifyUserCommand {
    pub user_id: crate::domain::foundation::UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// Handler for direct (admin-issued) notifications.
pub struct NotifyUserHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotifyUserHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(
        &self,
        cmd: NotifyUserCommand,
        actor: &Actor,
    ) -> Result<Notification, DomainError> {
        actor.check_admin()?;

        let notification = Notification::new(
            NotificationId::new(),
            cmd.user_id,
            cmd.kind,
            cmd.title,
            cmd.body,
        )?;
        self.notifications.create(&notification).await?;

        tracing::info!(
            notification_id = %notification.id(),
            user_id = %notification.user_id(),
            kind = %notification.kind(),
            "notification sent"
        );
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::notification::tests::MockNotificationRepository;
    use crate::domain::foundation::{ErrorCode, Role, UserId};

    #[tokio::test]
    async fn admin_can_notify_any_user() {
        let notifications = Arc::new(MockNotificationRepository::new());
        let handler = NotifyUserHandler::new(notifications.clone());
        let recipient = UserId::new();

        let sent = handler
            .handle(
                NotifyUserCommand {
                    user_id: recipient,
                    kind: NotificationKind::System,
                    title: "Scheduled maintenance".into(),
                    body: "The site will be unavailable on Saturday.".into(),
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap();

        assert_eq!(sent.user_id(), &recipient);
        assert!(!sent.is_read());
        assert_eq!(notifications.all().len(), 1);
    }

    #[tokio::test]
    async fn regular_users_cannot_send_notifications() {
        let handler = NotifyUserHandler::new(Arc::new(MockNotificationRepository::new()));

        let err = handler
            .handle(
                NotifyUserCommand {
                    user_id: UserId::new(),
                    kind: NotificationKind::System,
                    title: "Hi".into(),
                    body: String::new(),
                },
                &Actor::new(UserId::new(), Role::User),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
