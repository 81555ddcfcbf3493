//! CreatePollHandler - admin authoring of a poll with nested questions.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, PollId, Timestamp};
use crate::domain::poll::Poll;
use crate::ports::PollRepository;

/// Command to create a poll. Questions are raw text paired with their
/// option labels; ids are assigned by the aggregate.
#[derive(Debug, Clone)]
pub struct CreatePollCommand {
    pub title: String,
    pub description: Option<String>,
    pub opens_at: Option<Timestamp>,
    pub closes_at: Option<Timestamp>,
    pub questions: Vec<(String, Vec<String>)>,
}

/// Handler for poll creation. Admin only; the poll starts as a draft.
pub struct CreatePollHandler {
    polls: Arc<dyn PollRepository>,
}

impl CreatePollHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(&self, cmd: CreatePollCommand, actor: &Actor) -> Result<Poll, DomainError> {
        actor.check_admin()?;

        let poll = Poll::new(
            PollId::new(),
            cmd.title,
            cmd.description,
            actor.user_id,
            cmd.opens_at,
            cmd.closes_at,
            cmd.questions,
        )?;
        self.polls.create(&poll).await?;

        tracing::info!(poll_id = %poll.id(), title = poll.title(), "poll created");
        Ok(poll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::poll::tests::MockPollRepository;
    use crate::domain::foundation::{ErrorCode, Role, UserId};
    use crate::domain::poll::PollStatus;

    fn command() -> CreatePollCommand {
        CreatePollCommand {
            title: "Transit priorities".into(),
            description: None,
            opens_at: None,
            closes_at: None,
            questions: vec![(
                "Which line should be extended first?".into(),
                vec!["North".into(), "South".into()],
            )],
        }
    }

    #[tokio::test]
    async fn admin_creates_a_draft_poll() {
        let polls = Arc::new(MockPollRepository::new());
        let handler = CreatePollHandler::new(polls.clone());

        let poll = handler
            .handle(command(), &Actor::new(UserId::new(), Role::Admin))
            .await
            .unwrap();

        assert_eq!(poll.status(), PollStatus::Draft);
        assert_eq!(poll.questions().len(), 1);
        assert_eq!(polls.all().len(), 1);
    }

    #[tokio::test]
    async fn regular_users_cannot_create_polls() {
        let handler = CreatePollHandler::new(Arc::new(MockPollRepository::new()));

        let err = handler
            .handle(command(), &Actor::new(UserId::new(), Role::User))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn questions_without_enough_options_are_rejected() {
        let handler = CreatePollHandler::new(Arc::new(MockPollRepository::new()));
        let cmd = CreatePollCommand {
            questions: vec![("Lonely?".into(), vec!["Yes".into()])],
            ..command()
        };

        let err = handler
            .handle(cmd, &Actor::new(UserId::new(), Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
