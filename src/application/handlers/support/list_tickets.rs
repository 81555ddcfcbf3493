//! Ticket read queries.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, TicketId};
use crate::domain::support::{AdminMessage, SupportTicket, TicketStatus};
use crate::ports::SupportRepository;

/// A ticket together with its admin messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TicketWithMessages {
    pub ticket: SupportTicket,
    pub messages: Vec<AdminMessage>,
}

/// Handler fetching one ticket with its thread.
///
/// Visible to the ticket's owner and to admins. Anonymous tickets have
/// no owner, so only admins can fetch them.
pub struct GetTicketHandler {
    tickets: Arc<dyn SupportRepository>,
}

impl GetTicketHandler {
    pub fn new(tickets: Arc<dyn SupportRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(
        &self,
        ticket_id: TicketId,
        actor: &Actor,
    ) -> Result<TicketWithMessages, DomainError> {
        let ticket = self.tickets.find_by_id(&ticket_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::TicketNotFound,
                format!("Ticket not found: {}", ticket_id),
            )
        })?;

        match ticket.user_id() {
            Some(owner) => actor.check_can_manage(owner)?,
            None => actor.check_admin()?,
        }

        let messages = self.tickets.list_messages(&ticket_id).await?;
        Ok(TicketWithMessages { ticket, messages })
    }
}

/// Handler for the admin ticket queue, optionally filtered by status.
///
/// The queue degrades to empty on storage failure.
pub struct ListTicketsHandler {
    tickets: Arc<dyn SupportRepository>,
}

impl ListTicketsHandler {
    pub fn new(tickets: Arc<dyn SupportRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(
        &self,
        status: Option<TicketStatus>,
        actor: &Actor,
    ) -> Result<Vec<SupportTicket>, DomainError> {
        actor.check_admin()?;

        Ok(match self.tickets.list(status).await {
            Ok(tickets) => tickets,
            Err(e) => {
                tracing::warn!(error = %e, "ticket list failed");
                Vec::new()
            }
        })
    }
}

/// Handler listing the caller's own tickets. Degrades to empty.
pub struct ListOwnTicketsHandler {
    tickets: Arc<dyn SupportRepository>,
}

impl ListOwnTicketsHandler {
    pub fn new(tickets: Arc<dyn SupportRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(&self, actor: &Actor) -> Vec<SupportTicket> {
        match self.tickets.list_by_user(&actor.user_id).await {
            Ok(tickets) => tickets,
            Err(e) => {
                tracing::warn!(error = %e, user_id = %actor.user_id, "own ticket list failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::support::tests::MockSupportRepository;
    use crate::domain::foundation::{Role, UserId};

    fn ticket(user_id: Option<UserId>) -> SupportTicket {
        SupportTicket::new(
            TicketId::new(),
            user_id,
            "someone@example.com".into(),
            "Subject".into(),
            "Body".into(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn owner_sees_their_ticket_with_messages() {
        let owner = UserId::new();
        let t = ticket(Some(owner));
        let ticket_id = *t.id();
        let handler = GetTicketHandler::new(Arc::new(MockSupportRepository::with(vec![t])));

        let fetched = handler
            .handle(ticket_id, &Actor::new(owner, Role::User))
            .await
            .unwrap();
        assert_eq!(fetched.ticket.id(), &ticket_id);
        assert!(fetched.messages.is_empty());
    }

    #[tokio::test]
    async fn strangers_cannot_read_someone_elses_ticket() {
        let t = ticket(Some(UserId::new()));
        let ticket_id = *t.id();
        let handler = GetTicketHandler::new(Arc::new(MockSupportRepository::with(vec![t])));

        let err = handler
            .handle(ticket_id, &Actor::new(UserId::new(), Role::User))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn anonymous_tickets_are_admin_only() {
        let t = ticket(None);
        let ticket_id = *t.id();
        let handler = GetTicketHandler::new(Arc::new(MockSupportRepository::with(vec![t])));

        assert!(handler
            .handle(ticket_id, &Actor::new(UserId::new(), Role::User))
            .await
            .is_err());
        assert!(handler
            .handle(ticket_id, &Actor::new(UserId::new(), Role::Admin))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn admin_queue_filters_by_status() {
        let mut resolved = ticket(None);
        resolved.transition(TicketStatus::Resolved).unwrap();
        let repo = Arc::new(MockSupportRepository::with(vec![resolved.clone(), ticket(None)]));

        let handler = ListTicketsHandler::new(repo);
        let listed = handler
            .handle(Some(TicketStatus::Resolved), &Actor::new(UserId::new(), Role::Admin))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), resolved.id());
    }

    #[tokio::test]
    async fn users_list_only_their_own_tickets() {
        let me = UserId::new();
        let mine = ticket(Some(me));
        let repo = Arc::new(MockSupportRepository::with(vec![
            mine.clone(),
            ticket(Some(UserId::new())),
            ticket(None),
        ]));

        let listed = ListOwnTicketsHandler::new(repo)
            .handle(&Actor::new(me, Role::User))
            .await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), mine.id());
    }
}
