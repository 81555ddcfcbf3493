//! Poll handlers.

mod create_poll;
mod get_poll;
mod manage_poll;
mod poll_results;
mod submit_response;

pub use create_poll::{CreatePollCommand, CreatePollHandler};
pub use get_poll::{GetPollHandler, ListPollsHandler};
pub use manage_poll::{ClosePollHandler, DeletePollHandler, OpenPollHandler};
pub use poll_results::PollResultsHandler;
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler};

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::foundation::{
        DomainError, ErrorCode, PollId, PollOptionId, PollQuestionId, UserId,
    };
    use crate::domain::poll::{Poll, PollResponse, PollStatus};
    use crate::ports::PollRepository;

    /// In-memory poll repository for handler tests.
    pub struct MockPollRepository {
        polls: Mutex<Vec<Poll>>,
        responses: Mutex<Vec<PollResponse>>,
        fail_reads: bool,
    }

    impl MockPollRepository {
        pub fn new() -> Self {
            Self {
                polls: Mutex::new(Vec::new()),
                responses: Mutex::new(Vec::new()),
                fail_reads: false,
            }
        }

        pub fn with(polls: Vec<Poll>) -> Self {
            Self {
                polls: Mutex::new(polls),
                responses: Mutex::new(Vec::new()),
                fail_reads: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                polls: Mutex::new(Vec::new()),
                responses: Mutex::new(Vec::new()),
                fail_reads: true,
            }
        }

        pub fn all(&self) -> Vec<Poll> {
            self.polls.lock().unwrap().clone()
        }

        pub fn responses(&self) -> Vec<PollResponse> {
            self.responses.lock().unwrap().clone()
        }

        fn check_reads(&self) -> Result<(), DomainError> {
            if self.fail_reads {
                Err(DomainError::new(ErrorCode::DatabaseError, "mock read failure"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl PollRepository for MockPollRepository {
        async fn create(&self, poll: &Poll) -> Result<(), DomainError> {
            self.polls.lock().unwrap().push(poll.clone());
            Ok(())
        }

        async fn update(&self, poll: &Poll) -> Result<(), DomainError> {
            let mut polls = self.polls.lock().unwrap();
            match polls.iter().position(|p| p.id() == poll.id()) {
                Some(pos) => {
                    polls[pos] = poll.clone();
                    Ok(())
                }
                None => Err(DomainError::new(ErrorCode::PollNotFound, "Poll not found")),
            }
        }

        async fn find_by_id(&self, id: &PollId) -> Result<Option<Poll>, DomainError> {
            self.check_reads()?;
            Ok(self
                .polls
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id() == id)
                .cloned())
        }

        async fn list(&self, status: Option<PollStatus>) -> Result<Vec<Poll>, DomainError> {
            self.check_reads()?;
            Ok(self
                .polls
                .lock()
                .unwrap()
                .iter()
                .filter(|p| status.map_or(true, |s| p.status() == s))
                .cloned()
                .collect())
        }

        async fn create_response(&self, response: &PollResponse) -> Result<(), DomainError> {
            let mut responses = self.responses.lock().unwrap();
            if responses
                .iter()
                .any(|r| r.poll_id == response.poll_id && r.user_id == response.user_id)
            {
                return Err(DomainError::new(
                    ErrorCode::AlreadyResponded,
                    "Already responded",
                ));
            }
            responses.push(response.clone());
            Ok(())
        }

        async fn has_responded(
            &self,
            poll_id: &PollId,
            user_id: &UserId,
        ) -> Result<bool, DomainError> {
            self.check_reads()?;
            Ok(self
                .responses
                .lock()
                .unwrap()
                .iter()
                .any(|r| &r.poll_id == poll_id && &r.user_id == user_id))
        }

        async fn count_responses(&self, poll_id: &PollId) -> Result<u64, DomainError> {
            self.check_reads()?;
            Ok(self
                .responses
                .lock()
                .unwrap()
                .iter()
                .filter(|r| &r.poll_id == poll_id)
                .count() as u64)
        }

        async fn answer_counts(
            &self,
            poll_id: &PollId,
        ) -> Result<Vec<(PollQuestionId, PollOptionId, u64)>, DomainError> {
            self.check_reads()?;
            let responses = self.responses.lock().unwrap();
            let mut counts: Vec<(PollQuestionId, PollOptionId, u64)> = Vec::new();
            for answer in responses
                .iter()
                .filter(|r| &r.poll_id == poll_id)
                .flat_map(|r| r.answers.iter())
            {
                match counts
                    .iter_mut()
                    .find(|(q, o, _)| q == &answer.question_id && o == &answer.option_id)
                {
                    Some((_, _, n)) => *n += 1,
                    None => counts.push((answer.question_id, answer.option_id, 1)),
                }
            }
            Ok(counts)
        }

        async fn delete(&self, id: &PollId) -> Result<(), DomainError> {
            let mut polls = self.polls.lock().unwrap();
            match polls.iter().position(|p| p.id() == id) {
                Some(pos) => {
                    polls.remove(pos);
                    self.responses.lock().unwrap().retain(|r| &r.poll_id != id);
                    Ok(())
                }
                None => Err(DomainError::new(ErrorCode::PollNotFound, "Poll not found")),
            }
        }
    }
}
