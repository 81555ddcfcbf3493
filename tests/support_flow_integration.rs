//! Integration tests for the support ticket flow.
//!
//! Covers the path from an opened ticket through an admin reply and
//! resolution to the dashboard stats, using in-memory repositories.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use civiscore::application::handlers::support::{
    OpenTicketCommand, OpenTicketHandler, ReplyTicketCommand, ReplyTicketHandler,
    TicketStatsHandler, UpdateTicketStatusCommand, UpdateTicketStatusHandler,
};
use civiscore::domain::foundation::{
    Actor, DomainError, ErrorCode, NotificationId, Role, TicketId, UserId,
};
use civiscore::domain::notification::Notification;
use civiscore::domain::support::{AdminMessage, SupportTicket, TicketStats, TicketStatus};
use civiscore::ports::{NotificationRepository, SupportRepository};

// =============================================================================
// Test infrastructure
// =============================================================================

/// In-memory ticket store.
struct TestSupportRepository {
    tickets: RwLock<Vec<SupportTicket>>,
    messages: RwLock<Vec<AdminMessage>>,
}

impl TestSupportRepository {
    fn new() -> Self {
        Self {
            tickets: RwLock::new(Vec::new()),
            messages: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SupportRepository for TestSupportRepository {
    async fn create(&self, ticket: &SupportTicket) -> Result<(), DomainError> {
        self.tickets.write().await.push(ticket.clone());
        Ok(())
    }

    async fn update(&self, ticket: &SupportTicket) -> Result<(), DomainError> {
        let mut tickets = self.tickets.write().await;
        match tickets.iter_mut().find(|t| t.id() == ticket.id()) {
            Some(slot) => {
                *slot = ticket.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::TicketNotFound,
                "ticket missing",
            )),
        }
    }

    async fn find_by_id(&self, id: &TicketId) -> Result<Option<SupportTicket>, DomainError> {
        Ok(self.tickets.read().await.iter().find(|t| t.id() == id).cloned())
    }

    async fn list(&self, status: Option<TicketStatus>) -> Result<Vec<SupportTicket>, DomainError> {
        Ok(self
            .tickets
            .read()
            .await
            .iter()
            .filter(|t| status.map_or(true, |s| t.status() == s))
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<SupportTicket>, DomainError> {
        Ok(self
            .tickets
            .read()
            .await
            .iter()
            .filter(|t| t.user_id() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn add_message(&self, message: &AdminMessage) -> Result<(), DomainError> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn list_messages(&self, ticket_id: &TicketId) -> Result<Vec<AdminMessage>, DomainError> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| &m.ticket_id == ticket_id)
            .cloned()
            .collect())
    }

    async fn stats(&self) -> Result<TicketStats, DomainError> {
        let tickets = self.tickets.read().await;
        let counts: Vec<(TicketStatus, u64)> = TicketStatus::ALL
            .iter()
            .map(|status| {
                (
                    *status,
                    tickets.iter().filter(|t| t.status() == *status).count() as u64,
                )
            })
            .collect();
        let resolution_hours: Vec<f64> = tickets
            .iter()
            .filter_map(|t| {
                t.resolved_at().map(|resolved| {
                    resolved.duration_since(t.created_at()).num_seconds() as f64 / 3600.0
                })
            })
            .collect();
        Ok(TicketStats::compute(&counts, &resolution_hours))
    }
}

/// In-memory notification sink.
struct TestNotificationRepository {
    sent: RwLock<Vec<Notification>>,
}

impl TestNotificationRepository {
    fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
        }
    }

    async fn all(&self) -> Vec<Notification> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl NotificationRepository for TestNotificationRepository {
    async fn create(&self, notification: &Notification) -> Result<(), DomainError> {
        self.sent.write().await.push(notification.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &NotificationId,
    ) -> Result<Option<Notification>, DomainError> {
        Ok(self.sent.read().await.iter().find(|n| n.id() == id).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DomainError> {
        Ok(self
            .sent
            .read()
            .await
            .iter()
            .filter(|n| n.user_id() == user_id && (!unread_only || !n.is_read()))
            .cloned()
            .collect())
    }

    async fn unread_count(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .sent
            .read()
            .await
            .iter()
            .filter(|n| n.user_id() == user_id && !n.is_read())
            .count() as u64)
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<(), DomainError> {
        let mut sent = self.sent.write().await;
        match sent.iter_mut().find(|n| n.id() == id) {
            Some(n) => {
                n.mark_read();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                "notification missing",
            )),
        }
    }

    async fn mark_all_read(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let mut sent = self.sent.write().await;
        let mut changed = 0;
        for n in sent.iter_mut().filter(|n| n.user_id() == user_id) {
            if !n.is_read() {
                n.mark_read();
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn delete(&self, id: &NotificationId) -> Result<(), DomainError> {
        let mut sent = self.sent.write().await;
        let before = sent.len();
        sent.retain(|n| n.id() != id);
        if sent.len() == before {
            return Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                "notification missing",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn ticket_lifecycle_with_reply_and_resolution() {
    let tickets = Arc::new(TestSupportRepository::new());
    let notifications = Arc::new(TestNotificationRepository::new());
    let admin = Actor::new(UserId::new(), Role::Admin);
    let owner = UserId::new();

    // A registered user opens a ticket.
    let open = OpenTicketHandler::new(tickets.clone());
    let ticket = open
        .handle(OpenTicketCommand {
            user_id: Some(owner),
            email: "voter@example.com".into(),
            subject: "Wrong leader photo".into(),
            body: "The photo on the profile is outdated.".into(),
        })
        .await
        .unwrap();
    assert_eq!(ticket.status(), TicketStatus::Open);

    // An admin replies; the owner is notified.
    let reply = ReplyTicketHandler::new(tickets.clone(), notifications.clone());
    reply
        .handle(
            ReplyTicketCommand {
                ticket_id: *ticket.id(),
                body: "Thanks, we replaced the photo.".into(),
            },
            &admin,
        )
        .await
        .unwrap();
    let sent = notifications.all().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id(), &owner);

    // Resolving stamps resolved_at.
    let update = UpdateTicketStatusHandler::new(tickets.clone());
    let resolved = update
        .handle(
            UpdateTicketStatusCommand {
                ticket_id: *ticket.id(),
                status: TicketStatus::Resolved,
            },
            &admin,
        )
        .await
        .unwrap();
    assert!(resolved.resolved_at().is_some());

    // The dashboard sees one resolved ticket.
    let stats = TicketStatsHandler::new(tickets.clone())
        .handle(&admin)
        .await
        .unwrap();
    assert_eq!(stats.open, 0);
    assert_eq!(stats.resolved, 1);
}

#[tokio::test]
async fn anonymous_tickets_carry_no_owner_and_trigger_no_notification() {
    let tickets = Arc::new(TestSupportRepository::new());
    let notifications = Arc::new(TestNotificationRepository::new());
    let admin = Actor::new(UserId::new(), Role::Admin);

    let ticket = OpenTicketHandler::new(tickets.clone())
        .handle(OpenTicketCommand {
            user_id: None,
            email: "passerby@example.com".into(),
            subject: "Login trouble".into(),
            body: "I cannot sign in.".into(),
        })
        .await
        .unwrap();
    assert!(ticket.user_id().is_none());

    ReplyTicketHandler::new(tickets.clone(), notifications.clone())
        .handle(
            ReplyTicketCommand {
                ticket_id: *ticket.id(),
                body: "Password resets are back up.".into(),
            },
            &admin,
        )
        .await
        .unwrap();
    assert!(notifications.all().await.is_empty());
}

#[tokio::test]
async fn closed_tickets_reject_further_transitions() {
    let tickets = Arc::new(TestSupportRepository::new());
    let admin = Actor::new(UserId::new(), Role::Admin);

    let ticket = OpenTicketHandler::new(tickets.clone())
        .handle(OpenTicketCommand {
            user_id: Some(UserId::new()),
            email: "voter@example.com".into(),
            subject: "Duplicate profile".into(),
            body: "Two entries for the same mayor.".into(),
        })
        .await
        .unwrap();

    let update = UpdateTicketStatusHandler::new(tickets.clone());
    update
        .handle(
            UpdateTicketStatusCommand {
                ticket_id: *ticket.id(),
                status: TicketStatus::Closed,
            },
            &admin,
        )
        .await
        .unwrap();

    let err = update
        .handle(
            UpdateTicketStatusCommand {
                ticket_id: *ticket.id(),
                status: TicketStatus::Open,
            },
            &admin,
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
}
