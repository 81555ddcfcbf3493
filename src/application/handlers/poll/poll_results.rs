//! PollResultsHandler - assembles per-question tallies for a poll.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PollId};
use crate::domain::poll::{PollResults, QuestionResults};
use crate::ports::PollRepository;

/// Handler producing vote counts and percentages for every option.
///
/// Percentages are computed against each question's own answer total, so
/// a question skipped by some respondents still sums to ~100.
pub struct PollResultsHandler {
    polls: Arc<dyn PollRepository>,
}

impl PollResultsHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(&self, poll_id: PollId) -> Result<PollResults, DomainError> {
        let poll = self.polls.find_by_id(&poll_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::PollNotFound, format!("Poll not found: {}", poll_id))
        })?;

        let counts = self.polls.answer_counts(&poll_id).await?;
        let response_count = self.polls.count_responses(&poll_id).await?;

        let questions = poll
            .questions()
            .iter()
            .map(|question| {
                let question_counts: Vec<_> = counts
                    .iter()
                    .filter(|(qid, _, _)| qid == &question.id)
                    .map(|(_, oid, n)| (*oid, *n))
                    .collect();
                QuestionResults::tally(question, &question_counts)
            })
            .collect();

        Ok(PollResults {
            poll_id,
            title: poll.title().to_string(),
            status: poll.status(),
            response_count,
            questions,
        })
    }
}
