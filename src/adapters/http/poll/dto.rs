//! JSON request/response types for poll endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PollOptionId, PollQuestionId, Timestamp};
use crate::domain::poll::{Poll, PollResults, PollStatus};

/// One question in a poll creation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub prompt: String,
    pub options: Vec<String>,
}

/// Request to create a poll.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePollRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closes_at: Option<DateTime<Utc>>,
    pub questions: Vec<CreateQuestionRequest>,
}

impl CreatePollRequest {
    pub fn opens_at_timestamp(&self) -> Option<Timestamp> {
        self.opens_at.map(Timestamp::from_datetime)
    }

    pub fn closes_at_timestamp(&self) -> Option<Timestamp> {
        self.closes_at.map(Timestamp::from_datetime)
    }
}

/// One answer in a response submission.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub question_id: PollQuestionId,
    pub option_id: PollOptionId,
}

/// Request to submit a poll response.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponseRequest {
    pub answers: Vec<AnswerRequest>,
}

/// Optional status filter on the poll listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollListParams {
    pub status: Option<PollStatus>,
}

/// An option nested in a poll response body.
#[derive(Debug, Clone, Serialize)]
pub struct PollOptionResponse {
    pub id: String,
    pub label: String,
}

/// A question nested in a poll response body.
#[derive(Debug, Clone, Serialize)]
pub struct PollQuestionResponse {
    pub id: String,
    pub prompt: String,
    pub options: Vec<PollOptionResponse>,
}

/// A poll as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PollResponseBody {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: PollStatus,
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
    pub questions: Vec<PollQuestionResponse>,
    pub created_at: String,
}

impl From<Poll> for PollResponseBody {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id().to_string(),
            title: poll.title().to_string(),
            description: poll.description().map(str::to_string),
            status: poll.status(),
            opens_at: poll.opens_at().map(|t| t.to_string()),
            closes_at: poll.closes_at().map(|t| t.to_string()),
            questions: poll
                .questions()
                .iter()
                .map(|q| PollQuestionResponse {
                    id: q.id.to_string(),
                    prompt: q.prompt.clone(),
                    options: q
                        .options
                        .iter()
                        .map(|o| PollOptionResponse {
                            id: o.id.to_string(),
                            label: o.label.clone(),
                        })
                        .collect(),
                })
                .collect(),
            created_at: poll.created_at().to_string(),
        }
    }
}

/// Tallied results as returned by the API.
///
/// `PollResults` already serializes cleanly, so it passes through.
#[derive(Debug, Clone, Serialize)]
pub struct PollResultsResponse(pub PollResults);
