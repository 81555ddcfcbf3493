//! ReplyTicketHandler - admin replies attached to a ticket.

use std::sync::Arc;

use crate::domain::foundation::{Actor, AdminMessageId, DomainError, ErrorCode, NotificationId, TicketId};
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::support::AdminMessage;
use crate::ports::{NotificationRepository, SupportRepository};

/// Command to reply to a ticket.
#[derive(Debug, Clone)]
pub struct ReplyTicketCommand {
    pub ticket_id: TicketId,
    pub body: String,
}

/// Handler for admin replies. Admin only.
///
/// When the ticket belongs to a registered user they get a notification;
/// anonymous tickets have no inbox to notify. A failed notification is
/// logged but doesn't fail the reply.
pub struct ReplyTicketHandler {
    tickets: Arc<dyn SupportRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl ReplyTicketHandler {
    pub fn new(
        tickets: Arc<dyn SupportRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            tickets,
            notifications,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReplyTicketCommand,
        actor: &Actor,
    ) -> Result<AdminMessage, DomainError> {
        actor.check_admin()?;

        let ticket = self.tickets.find_by_id(&cmd.ticket_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::TicketNotFound,
                format!("Ticket not found: {}", cmd.ticket_id),
            )
        })?;

        let message = AdminMessage::new(
            AdminMessageId::new(),
            cmd.ticket_id,
            actor.user_id,
            cmd.body,
        )?;
        self.tickets.add_message(&message).await?;

        if let Some(user_id) = ticket.user_id() {
            let notification = Notification::new(
                NotificationId::new(),
                *user_id,
                NotificationKind::TicketReply,
                format!("Reply to your ticket: {}", ticket.subject()),
                "An administrator replied to your support ticket.".into(),
            )?;
            if let Err(e) = self.notifications.create(&notification).await {
                tracing::warn!(error = %e, ticket_id = %ticket.id(), "reply notification failed");
            }
        }

        tracing::info!(ticket_id = %ticket.id(), "admin replied to ticket");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::notification::tests::MockNotificationRepository;
    use crate::application::handlers::support::tests::MockSupportRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::support::SupportTicket;

    fn ticket(user_id: Option<UserId>) -> SupportTicket {
        SupportTicket::new(
            TicketId::new(),
            user_id,
            "someone@example.com".into(),
            "Question".into(),
            "How do I change my name?".into(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn reply_notifies_the_ticket_owner() {
        let owner = UserId::new();
        let t = ticket(Some(owner));
        let ticket_id = *t.id();
        let tickets = Arc::new(MockSupportRepository::with(vec![t]));
        let notifications = Arc::new(MockNotificationRepository::new());

        let handler = ReplyTicketHandler::new(tickets.clone(), notifications.clone());
        handler
            .handle(
                ReplyTicketCommand {
                    ticket_id,
                    body: "Go to your profile page.".into(),
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap();

        assert_eq!(tickets.messages_for(&ticket_id).len(), 1);
        let sent = notifications.all();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].user_id(), &owner);
        assert_eq!(sent[0].kind(), NotificationKind::TicketReply);
    }

    #[tokio::test]
    async fn anonymous_tickets_get_no_notification() {
        let t = ticket(None);
        let ticket_id = *t.id();
        let notifications = Arc::new(MockNotificationRepository::new());
        let handler = ReplyTicketHandler::new(
            Arc::new(MockSupportRepository::with(vec![t])),
            notifications.clone(),
        );

        handler
            .handle(
                ReplyTicketCommand {
                    ticket_id,
                    body: "We emailed you.".into(),
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap();
        assert!(notifications.all().is_empty());
    }

    #[tokio::test]
    async fn only_admins_reply() {
        let t = ticket(None);
        let ticket_id = *t.id();
        let handler = ReplyTicketHandler::new(
            Arc::new(MockSupportRepository::with(vec![t])),
            Arc::new(MockNotificationRepository::new()),
        );

        let err = handler
            .handle(
                ReplyTicketCommand {
                    ticket_id,
                    body: "Hi".into(),
                },
                &Actor::new(UserId::new(), Role::User),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
