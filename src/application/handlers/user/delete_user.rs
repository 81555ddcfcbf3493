//! DeleteUserHandler - removes a user account.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, UserId};
use crate::ports::UserRepository;

/// Command to delete a user.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

/// Handler for account deletion.
///
/// The account owner or an admin may delete it. Dependent rows (ratings,
/// comments, responses) go with it via foreign-key cascade.
pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand, actor: &Actor) -> Result<(), DomainError> {
        actor.check_can_manage(&cmd.user_id)?;
        self.repository.delete(&cmd.user_id).await?;
        tracing::info!(user_id = %cmd.user_id, "user deleted");
        Ok(())
    }
}
