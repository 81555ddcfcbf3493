//! Poll read queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PollId};
use crate::domain::poll::{Poll, PollStatus};
use crate::ports::PollRepository;

/// Handler fetching one poll with its questions and options.
pub struct GetPollHandler {
    polls: Arc<dyn PollRepository>,
}

impl GetPollHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(&self, poll_id: PollId) -> Result<Poll, DomainError> {
        self.polls.find_by_id(&poll_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::PollNotFound, format!("Poll not found: {}", poll_id))
        })
    }
}

/// Handler listing polls, optionally narrowed to one status.
///
/// Listing degrades to empty on storage failure.
pub struct ListPollsHandler {
    polls: Arc<dyn PollRepository>,
}

impl ListPollsHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(&self, status: Option<PollStatus>) -> Vec<Poll> {
        match self.polls.list(status).await {
            Ok(polls) => polls,
            Err(e) => {
                tracing::warn!(error = %e, "poll list failed");
                Vec::new()
            }
        }
    }
}
