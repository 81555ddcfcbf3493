//! Poll repository port.
//!
//! Polls are persisted as a unit: creating one writes the poll, its
//! questions, and their options in a single transaction. Responses are
//! likewise written atomically with their answers.

use crate::domain::foundation::{DomainError, PollId, PollOptionId, PollQuestionId, UserId};
use crate::domain::poll::{Poll, PollResponse, PollStatus};
use async_trait::async_trait;

/// Repository port for poll persistence.
#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Inserts a poll with its questions and options transactionally.
    async fn create(&self, poll: &Poll) -> Result<(), DomainError>;

    /// Updates a poll's status and window fields.
    ///
    /// # Errors
    ///
    /// - `PollNotFound` if the poll doesn't exist
    async fn update(&self, poll: &Poll) -> Result<(), DomainError>;

    /// Finds a poll with its questions and options. Returns `None` if not
    /// found.
    async fn find_by_id(&self, id: &PollId) -> Result<Option<Poll>, DomainError>;

    /// Lists polls, optionally narrowed to one status, newest first.
    ///
    /// Listed polls carry their questions and options.
    async fn list(&self, status: Option<PollStatus>) -> Result<Vec<Poll>, DomainError>;

    /// Inserts a response with its answers transactionally.
    ///
    /// # Errors
    ///
    /// - `AlreadyResponded` if the user already responded to this poll
    async fn create_response(&self, response: &PollResponse) -> Result<(), DomainError>;

    /// Returns whether a user has already responded to a poll.
    async fn has_responded(&self, poll_id: &PollId, user_id: &UserId) -> Result<bool, DomainError>;

    /// Counts responses for a poll.
    async fn count_responses(&self, poll_id: &PollId) -> Result<u64, DomainError>;

    /// Tallies answers per (question, option) for a poll.
    async fn answer_counts(
        &self,
        poll_id: &PollId,
    ) -> Result<Vec<(PollQuestionId, PollOptionId, u64)>, DomainError>;

    /// Deletes a poll and its dependent rows.
    ///
    /// # Errors
    ///
    /// - `PollNotFound` if the poll doesn't exist
    async fn delete(&self, id: &PollId) -> Result<(), DomainError>;
}
