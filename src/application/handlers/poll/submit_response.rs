//! SubmitResponseHandler - one response per user per active poll.

use std::sync::Arc;

use crate::domain::foundation::{
    Actor, DomainError, ErrorCode, PollId, PollOptionId, PollQuestionId, PollResponseId, Timestamp,
};
use crate::domain::poll::{PollAnswer, PollResponse};
use crate::ports::PollRepository;

/// Command to submit a poll response.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub poll_id: PollId,
    pub answers: Vec<(PollQuestionId, PollOptionId)>,
}

/// Handler for response submission.
///
/// The poll must be active and inside its window; every answer must
/// reference an option belonging to its question; a second response
/// from the same user is rejected.
pub struct SubmitResponseHandler {
    polls: Arc<dyn PollRepository>,
}

impl SubmitResponseHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
        actor: &Actor,
    ) -> Result<PollResponse, DomainError> {
        let poll = self.polls.find_by_id(&cmd.poll_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::PollNotFound,
                format!("Poll not found: {}", cmd.poll_id),
            )
        })?;

        poll.check_accepts_responses(&Timestamp::now())?;
        if cmd.answers.is_empty() {
            return Err(DomainError::validation("answers", "Response has no answers"));
        }
        for (question_id, option_id) in &cmd.answers {
            poll.check_answer(question_id, option_id)?;
        }

        if self.polls.has_responded(&cmd.poll_id, &actor.user_id).await? {
            return Err(DomainError::new(
                ErrorCode::AlreadyResponded,
                "You have already responded to this poll",
            ));
        }

        let response = PollResponse {
            id: PollResponseId::new(),
            poll_id: cmd.poll_id,
            user_id: actor.user_id,
            answers: cmd
                .answers
                .into_iter()
                .map(|(question_id, option_id)| PollAnswer {
                    question_id,
                    option_id,
                })
                .collect(),
            submitted_at: Timestamp::now(),
        };
        self.polls.create_response(&response).await?;

        tracing::info!(poll_id = %response.poll_id, user_id = %response.user_id, "poll response recorded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::poll::tests::MockPollRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::poll::Poll;

    fn active_poll() -> Poll {
        let mut poll = Poll::new(
            PollId::new(),
            "Budget".into(),
            None,
            UserId::new(),
            None,
            None,
            vec![("Q".into(), vec!["A".into(), "B".into()])],
        )
        .unwrap();
        poll.open().unwrap();
        poll
    }

    fn first_answer(poll: &Poll) -> (PollQuestionId, PollOptionId) {
        let question = &poll.questions()[0];
        (question.id, question.options[0].id)
    }

    #[tokio::test]
    async fn valid_response_is_recorded() {
        let poll = active_poll();
        let cmd = SubmitResponseCommand {
            poll_id: *poll.id(),
            answers: vec![first_answer(&poll)],
        };
        let polls = Arc::new(MockPollRepository::with(vec![poll]));

        let handler = SubmitResponseHandler::new(polls.clone());
        let response = handler
            .handle(cmd, &Actor::new(UserId::new(), Role::User))
            .await
            .unwrap();

        assert_eq!(response.answers.len(), 1);
        assert_eq!(polls.responses().len(), 1);
    }

    #[tokio::test]
    async fn second_response_from_same_user_is_rejected() {
        let poll = active_poll();
        let cmd = SubmitResponseCommand {
            poll_id: *poll.id(),
            answers: vec![first_answer(&poll)],
        };
        let handler = SubmitResponseHandler::new(Arc::new(MockPollRepository::with(vec![poll])));
        let actor = Actor::new(UserId::new(), Role::User);

        handler.handle(cmd.clone(), &actor).await.unwrap();
        let err = handler.handle(cmd, &actor).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyResponded);
    }

    #[tokio::test]
    async fn draft_polls_reject_responses() {
        let mut poll = active_poll();
        poll.close().unwrap();
        let cmd = SubmitResponseCommand {
            poll_id: *poll.id(),
            answers: vec![first_answer(&poll)],
        };
        let handler = SubmitResponseHandler::new(Arc::new(MockPollRepository::with(vec![poll])));

        let err = handler
            .handle(cmd, &Actor::new(UserId::new(), Role::User))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PollNotActive);
    }

    #[tokio::test]
    async fn answers_must_match_the_polls_options() {
        let poll = active_poll();
        let question_id = poll.questions()[0].id;
        let cmd = SubmitResponseCommand {
            poll_id: *poll.id(),
            answers: vec![(question_id, PollOptionId::new())],
        };
        let handler = SubmitResponseHandler::new(Arc::new(MockPollRepository::with(vec![poll])));

        let err = handler
            .handle(cmd, &Actor::new(UserId::new(), Role::User))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
