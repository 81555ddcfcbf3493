//! TicketStatsHandler - the admin dashboard aggregate.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError};
use crate::domain::support::TicketStats;
use crate::ports::SupportRepository;

/// Handler for ticket statistics. Admin only.
pub struct TicketStatsHandler {
    tickets: Arc<dyn SupportRepository>,
}

impl TicketStatsHandler {
    pub fn new(tickets: Arc<dyn SupportRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(&self, actor: &Actor) -> Result<TicketStats, DomainError> {
        actor.check_admin()?;
        self.tickets.stats().await
    }
}
