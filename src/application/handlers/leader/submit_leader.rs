//! SubmitLeaderHandler - submits a leader profile for review.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, LeaderId};
use crate::domain::leader::{Leader, LeaderProfile};
use crate::ports::LeaderRepository;

/// Command to submit a new leader profile.
#[derive(Debug, Clone)]
pub struct SubmitLeaderCommand {
    pub profile: LeaderProfile,
}

/// Handler for leader submissions.
///
/// Any signed-in user may submit; the profile enters the pending review
/// queue attributed to the submitter.
pub struct SubmitLeaderHandler {
    repository: Arc<dyn LeaderRepository>,
}

impl SubmitLeaderHandler {
    pub fn new(repository: Arc<dyn LeaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SubmitLeaderCommand, actor: &Actor) -> Result<Leader, DomainError> {
        let leader = Leader::new(LeaderId::new(), cmd.profile, actor.user_id)?;
        self.repository.create(&leader).await?;

        tracing::info!(leader_id = %leader.id(), submitted_by = %actor.user_id, "leader submitted");
        Ok(leader)
    }
}
