//! UpdateLeaderHandler - edits a leader profile.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, LeaderId};
use crate::domain::leader::{Leader, LeaderProfile};
use crate::ports::LeaderRepository;

/// Command to edit a leader profile.
#[derive(Debug, Clone)]
pub struct UpdateLeaderCommand {
    pub leader_id: LeaderId,
    pub profile: LeaderProfile,
}

/// Handler for profile edits.
///
/// The original submitter or an admin may edit.
pub struct UpdateLeaderHandler {
    repository: Arc<dyn LeaderRepository>,
}

impl UpdateLeaderHandler {
    pub fn new(repository: Arc<dyn LeaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateLeaderCommand, actor: &Actor) -> Result<Leader, DomainError> {
        let mut leader = self
            .repository
            .find_by_id(&cmd.leader_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LeaderNotFound,
                    format!("Leader not found: {}", cmd.leader_id),
                )
            })?;

        actor.check_can_manage(leader.submitted_by())?;

        leader.update_profile(cmd.profile)?;
        self.repository.update(&leader).await?;

        Ok(leader)
    }
}
