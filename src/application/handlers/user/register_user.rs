//! RegisterUserHandler - creates a new user account.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub display_name: String,
}

/// Handler for user registration.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, DomainError> {
        if self.repository.find_by_email(&cmd.email).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateEmail,
                format!("Email already registered: {}", cmd.email),
            ));
        }

        let user = User::new(UserId::new(), cmd.email, cmd.display_name)?;
        self.repository.create(&user).await?;

        tracing::info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::user::tests::MockUserRepository;

    #[tokio::test]
    async fn registers_a_new_user() {
        let repo = Arc::new(MockUserRepository::new());
        let handler = RegisterUserHandler::new(repo.clone());

        let user = handler
            .handle(RegisterUserCommand {
                email: "ada@example.com".into(),
                display_name: "Ada".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let repo = Arc::new(MockUserRepository::new());
        let handler = RegisterUserHandler::new(repo.clone());

        let cmd = RegisterUserCommand {
            email: "ada@example.com".into(),
            display_name: "Ada".into(),
        };
        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateEmail);
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let repo = Arc::new(MockUserRepository::new());
        let handler = RegisterUserHandler::new(repo);

        let err = handler
            .handle(RegisterUserCommand {
                email: "not-an-email".into(),
                display_name: "Ada".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
