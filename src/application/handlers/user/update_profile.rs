//! UpdateProfileHandler - renames a user's display name.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command to update a user's profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub display_name: String,
}

/// Handler for profile updates.
///
/// The target user themselves or an admin may update a profile.
pub struct UpdateProfileHandler {
    repository: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand, actor: &Actor) -> Result<User, DomainError> {
        actor.check_can_manage(&cmd.user_id)?;

        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", cmd.user_id))
            })?;

        user.rename(cmd.display_name)?;
        self.repository.update(&user).await?;

        Ok(user)
    }
}
