//! Query handlers for user lookups.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Query for one user by id.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

/// Handler for fetching a single user.
pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<User, DomainError> {
        self.repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UserNotFound,
                    format!("User not found: {}", query.user_id),
                )
            })
    }
}

/// Handler for looking a user up by email (admin).
pub struct GetUserByEmailHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserByEmailHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, email: &str, actor: &Actor) -> Result<User, DomainError> {
        actor.check_admin()?;

        self.repository.find_by_email(email).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::UserNotFound,
                format!("No user with email: {}", email),
            )
        })
    }
}

/// Handler for the admin user listing.
///
/// Degrades gracefully on read failure: logs and returns an empty list.
pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, actor: &Actor) -> Result<Vec<User>, DomainError> {
        actor.check_admin()?;

        match self.repository.list().await {
            Ok(users) => Ok(users),
            Err(e) => {
                tracing::warn!(error = %e, "user listing failed, returning empty");
                Ok(Vec::new())
            }
        }
    }
}
