//! Support repository port.
//!
//! Covers tickets, their admin messages, and the aggregate stats the
//! admin dashboard shows.

use crate::domain::foundation::{DomainError, TicketId, UserId};
use crate::domain::support::{AdminMessage, SupportTicket, TicketStats, TicketStatus};
use async_trait::async_trait;

/// Repository port for support ticket persistence.
#[async_trait]
pub trait SupportRepository: Send + Sync {
    /// Inserts a new ticket.
    async fn create(&self, ticket: &SupportTicket) -> Result<(), DomainError>;

    /// Updates a ticket's status and timestamps.
    ///
    /// # Errors
    ///
    /// - `TicketNotFound` if the ticket doesn't exist
    async fn update(&self, ticket: &SupportTicket) -> Result<(), DomainError>;

    /// Finds a ticket by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &TicketId) -> Result<Option<SupportTicket>, DomainError>;

    /// Lists tickets, optionally narrowed to one status, newest first.
    async fn list(&self, status: Option<TicketStatus>) -> Result<Vec<SupportTicket>, DomainError>;

    /// Lists tickets opened by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<SupportTicket>, DomainError>;

    /// Attaches an admin message to a ticket.
    async fn add_message(&self, message: &AdminMessage) -> Result<(), DomainError>;

    /// Lists a ticket's admin messages, oldest first.
    async fn list_messages(&self, ticket_id: &TicketId) -> Result<Vec<AdminMessage>, DomainError>;

    /// Computes per-status counts and the average resolution time.
    async fn stats(&self) -> Result<TicketStats, DomainError>;
}
