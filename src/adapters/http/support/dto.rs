//! JSON request/response types for support endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::support::{AdminMessage, SupportTicket, TicketStatus};

/// Request to open a ticket. Callers without an account still leave a
/// contact email; the owner is taken from the identity headers when
/// present.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenTicketRequest {
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Request to move a ticket to a new status (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTicketStatusRequest {
    pub status: TicketStatus,
}

/// Request to post an admin reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyTicketRequest {
    pub body: String,
}

/// Optional status filter on the admin queue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketListParams {
    pub status: Option<TicketStatus>,
}

/// A ticket as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct TicketResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub status: TicketStatus,
    pub created_at: String,
    pub updated_at: String,
    pub resolved_at: Option<String>,
}

impl From<SupportTicket> for TicketResponse {
    fn from(ticket: SupportTicket) -> Self {
        Self {
            id: ticket.id().to_string(),
            user_id: ticket.user_id().map(|id| id.to_string()),
            email: ticket.email().to_string(),
            subject: ticket.subject().to_string(),
            body: ticket.body().to_string(),
            status: ticket.status(),
            created_at: ticket.created_at().to_string(),
            updated_at: ticket.updated_at().to_string(),
            resolved_at: ticket.resolved_at().map(|t| t.to_string()),
        }
    }
}

/// An admin reply as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub ticket_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: String,
}

impl From<AdminMessage> for MessageResponse {
    fn from(message: AdminMessage) -> Self {
        Self {
            id: message.id.to_string(),
            ticket_id: message.ticket_id.to_string(),
            author_id: message.author_id.to_string(),
            body: message.body,
            created_at: message.created_at.to_string(),
        }
    }
}

/// A ticket with its reply thread.
#[derive(Debug, Clone, Serialize)]
pub struct TicketThreadResponse {
    pub ticket: TicketResponse,
    pub messages: Vec<MessageResponse>,
}
