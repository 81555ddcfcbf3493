//! DeleteLeaderHandler - removes a leader profile. Admin only.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, LeaderId};
use crate::ports::LeaderRepository;

/// Command to delete a leader.
#[derive(Debug, Clone)]
pub struct DeleteLeaderCommand {
    pub leader_id: LeaderId,
}

/// Handler for leader deletion.
///
/// Ratings and comments on the leader cascade away with it.
pub struct DeleteLeaderHandler {
    repository: Arc<dyn LeaderRepository>,
}

impl DeleteLeaderHandler {
    pub fn new(repository: Arc<dyn LeaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteLeaderCommand, actor: &Actor) -> Result<(), DomainError> {
        actor.check_admin()?;
        self.repository.delete(&cmd.leader_id).await?;
        tracing::info!(leader_id = %cmd.leader_id, "leader deleted");
        Ok(())
    }
}
