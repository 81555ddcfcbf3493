//! OpenTicketHandler - opens a support ticket, anonymously or not.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TicketId, UserId};
use crate::domain::support::SupportTicket;
use crate::ports::SupportRepository;

/// Command to open a ticket. `user_id` is `None` for anonymous
/// visitors, who must still leave a contact email.
#[derive(Debug, Clone)]
pub struct OpenTicketCommand {
    pub user_id: Option<UserId>,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Handler for ticket creation. No authorization: anyone may open one.
pub struct OpenTicketHandler {
    tickets: Arc<dyn SupportRepository>,
}

impl OpenTicketHandler {
    pub fn new(tickets: Arc<dyn SupportRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(&self, cmd: OpenTicketCommand) -> Result<SupportTicket, DomainError> {
        let ticket = SupportTicket::new(
            TicketId::new(),
            cmd.user_id,
            cmd.email,
            cmd.subject,
            cmd.body,
        )?;
        self.tickets.create(&ticket).await?;

        tracing::info!(
            ticket_id = %ticket.id(),
            anonymous = ticket.user_id().is_none(),
            "support ticket opened"
        );
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::support::tests::MockSupportRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::support::TicketStatus;

    #[tokio::test]
    async fn anonymous_visitors_can_open_tickets() {
        let tickets = Arc::new(MockSupportRepository::new());
        let handler = OpenTicketHandler::new(tickets.clone());

        let ticket = handler
            .handle(OpenTicketCommand {
                user_id: None,
                email: "visitor@example.com".into(),
                subject: "Broken link".into(),
                body: "The leaders page 404s".into(),
            })
            .await
            .unwrap();

        assert_eq!(ticket.status(), TicketStatus::Open);
        assert!(ticket.user_id().is_none());
        assert_eq!(tickets.all().len(), 1);
    }

    #[tokio::test]
    async fn tickets_require_a_plausible_email() {
        let handler = OpenTicketHandler::new(Arc::new(MockSupportRepository::new()));

        let err = handler
            .handle(OpenTicketCommand {
                user_id: None,
                email: "not-an-email".into(),
                subject: "Hi".into(),
                body: "Help".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
