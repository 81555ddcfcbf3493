//! UpdateTicketStatusHandler - admin lifecycle moves for a ticket.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, TicketId};
use crate::domain::support::{SupportTicket, TicketStatus};
use crate::ports::SupportRepository;

/// Command to move a ticket to a new status.
#[derive(Debug, Clone)]
pub struct UpdateTicketStatusCommand {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
}

/// Handler for ticket status changes. Admin only.
pub struct UpdateTicketStatusHandler {
    tickets: Arc<dyn SupportRepository>,
}

impl UpdateTicketStatusHandler {
    pub fn new(tickets: Arc<dyn SupportRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(
        &self,
        cmd: UpdateTicketStatusCommand,
        actor: &Actor,
    ) -> Result<SupportTicket, DomainError> {
        actor.check_admin()?;

        let mut ticket = self.tickets.find_by_id(&cmd.ticket_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::TicketNotFound,
                format!("Ticket not found: {}", cmd.ticket_id),
            )
        })?;

        ticket.transition(cmd.status)?;
        self.tickets.update(&ticket).await?;

        tracing::info!(ticket_id = %ticket.id(), status = %ticket.status(), "ticket status changed");
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::support::tests::MockSupportRepository;
    use crate::domain::foundation::{Role, UserId};

    fn ticket() -> SupportTicket {
        SupportTicket::new(
            TicketId::new(),
            Some(UserId::new()),
            "user@example.com".into(),
            "Slow pages".into(),
            "Every page takes seconds".into(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn resolving_stamps_the_resolution_time() {
        let t = ticket();
        let id = *t.id();
        let tickets = Arc::new(MockSupportRepository::with(vec![t]));

        let handler = UpdateTicketStatusHandler::new(tickets.clone());
        let resolved = handler
            .handle(
                UpdateTicketStatusCommand {
                    ticket_id: id,
                    status: TicketStatus::Resolved,
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap();

        assert_eq!(resolved.status(), TicketStatus::Resolved);
        assert!(resolved.resolved_at().is_some());

        // Reopening clears the stamp.
        let reopened = handler
            .handle(
                UpdateTicketStatusCommand {
                    ticket_id: id,
                    status: TicketStatus::InProgress,
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap();
        assert!(reopened.resolved_at().is_none());
    }

    #[tokio::test]
    async fn closed_tickets_are_terminal() {
        let mut t = ticket();
        t.transition(TicketStatus::Closed).unwrap();
        let id = *t.id();
        let handler = UpdateTicketStatusHandler::new(Arc::new(MockSupportRepository::with(vec![t])));

        let err = handler
            .handle(
                UpdateTicketStatusCommand {
                    ticket_id: id,
                    status: TicketStatus::Open,
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    }

    #[tokio::test]
    async fn only_admins_move_tickets() {
        let t = ticket();
        let id = *t.id();
        let handler = UpdateTicketStatusHandler::new(Arc::new(MockSupportRepository::with(vec![t])));

        let err = handler
            .handle(
                UpdateTicketStatusCommand {
                    ticket_id: id,
                    status: TicketStatus::Resolved,
                },
                &Actor::new(UserId::new(), Role::User),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
