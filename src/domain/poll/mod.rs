//! Poll domain module.
//!
//! Admin-authored polls with nested questions and options. Users submit at
//! most one response per poll; each answer picks one option for one
//! question. Results report per-option counts and nearest-integer
//! percentages of each question's total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    DomainError, ErrorCode, Percentage, PollId, PollOptionId, PollQuestionId, PollResponseId,
    Timestamp, UserId, ValidationError,
};

/// Maximum length for poll titles and question prompts.
pub const MAX_TEXT_LENGTH: usize = 500;

/// Lifecycle state of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Draft,
    Active,
    Closed,
}

impl PollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollStatus::Draft => "draft",
            PollStatus::Active => "active",
            PollStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PollStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PollStatus::Draft),
            "active" => Ok(PollStatus::Active),
            "closed" => Ok(PollStatus::Closed),
            other => Err(format!("unknown poll status: {}", other)),
        }
    }
}

/// One selectable option under a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: PollOptionId,
    pub question_id: PollQuestionId,
    pub label: String,
    pub position: i32,
}

/// One question in a poll, owning its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollQuestion {
    pub id: PollQuestionId,
    pub poll_id: PollId,
    pub prompt: String,
    pub position: i32,
    pub options: Vec<PollOption>,
}

impl PollQuestion {
    /// Returns true if `option_id` belongs to this question.
    pub fn has_option(&self, option_id: &PollOptionId) -> bool {
        self.options.iter().any(|o| &o.id == option_id)
    }
}

/// A poll aggregate owning its questions.
///
/// # Invariants
///
/// - `title` is non-empty
/// - every question has at least two options
/// - responses are only accepted while the poll is `Active` and inside its
///   optional `[opens_at, closes_at]` window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    id: PollId,
    title: String,
    description: Option<String>,
    status: PollStatus,
    created_by: UserId,
    opens_at: Option<Timestamp>,
    closes_at: Option<Timestamp>,
    questions: Vec<PollQuestion>,
    created_at: Timestamp,
}

impl Poll {
    /// Creates a new draft poll.
    ///
    /// Question and option ids are assigned here; callers pass raw text.
    pub fn new(
        id: PollId,
        title: String,
        description: Option<String>,
        created_by: UserId,
        opens_at: Option<Timestamp>,
        closes_at: Option<Timestamp>,
        questions: Vec<(String, Vec<String>)>,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if title.len() > MAX_TEXT_LENGTH {
            return Err(ValidationError::out_of_range(
                "title",
                1,
                MAX_TEXT_LENGTH as i32,
                title.len() as i32,
            )
            .into());
        }
        if questions.is_empty() {
            return Err(DomainError::validation("questions", "Poll needs at least one question"));
        }

        let mut built = Vec::with_capacity(questions.len());
        for (qi, (prompt, options)) in questions.into_iter().enumerate() {
            if prompt.trim().is_empty() {
                return Err(ValidationError::empty_field("prompt").into());
            }
            if options.len() < 2 {
                return Err(DomainError::validation(
                    "options",
                    "Question needs at least two options",
                ));
            }
            let question_id = PollQuestionId::new();
            let options = options
                .into_iter()
                .enumerate()
                .map(|(oi, label)| {
                    if label.trim().is_empty() {
                        Err(ValidationError::empty_field("label").into())
                    } else {
                        Ok(PollOption {
                            id: PollOptionId::new(),
                            question_id,
                            label,
                            position: oi as i32,
                        })
                    }
                })
                .collect::<Result<Vec<_>, DomainError>>()?;

            built.push(PollQuestion {
                id: question_id,
                poll_id: id,
                prompt,
                position: qi as i32,
                options,
            });
        }

        Ok(Self {
            id,
            title,
            description,
            status: PollStatus::Draft,
            created_by,
            opens_at,
            closes_at,
            questions: built,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a poll from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PollId,
        title: String,
        description: Option<String>,
        status: PollStatus,
        created_by: UserId,
        opens_at: Option<Timestamp>,
        closes_at: Option<Timestamp>,
        questions: Vec<PollQuestion>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            created_by,
            opens_at,
            closes_at,
            questions,
            created_at,
        }
    }

    pub fn id(&self) -> &PollId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> PollStatus {
        self.status
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn opens_at(&self) -> Option<&Timestamp> {
        self.opens_at.as_ref()
    }

    pub fn closes_at(&self) -> Option<&Timestamp> {
        self.closes_at.as_ref()
    }

    pub fn questions(&self) -> &[PollQuestion] {
        &self.questions
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Opens the poll for responses.
    pub fn open(&mut self) -> Result<(), DomainError> {
        match self.status {
            PollStatus::Draft => {
                self.status = PollStatus::Active;
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                format!("Cannot open a {} poll", self.status),
            )),
        }
    }

    /// Closes the poll.
    pub fn close(&mut self) -> Result<(), DomainError> {
        match self.status {
            PollStatus::Active => {
                self.status = PollStatus::Closed;
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                format!("Cannot close a {} poll", self.status),
            )),
        }
    }

    /// Validates that a response may be submitted at `now`.
    pub fn check_accepts_responses(&self, now: &Timestamp) -> Result<(), DomainError> {
        if self.status != PollStatus::Active {
            return Err(DomainError::new(
                ErrorCode::PollNotActive,
                format!("Poll {} is {}", self.id, self.status),
            ));
        }
        if let Some(opens) = &self.opens_at {
            if now.is_before(opens) {
                return Err(DomainError::new(ErrorCode::PollNotActive, "Poll has not opened yet"));
            }
        }
        if let Some(closes) = &self.closes_at {
            if now.is_after(closes) {
                return Err(DomainError::new(ErrorCode::PollNotActive, "Poll has closed"));
            }
        }
        Ok(())
    }

    /// Finds the question an answer refers to, checking option membership.
    pub fn check_answer(
        &self,
        question_id: &PollQuestionId,
        option_id: &PollOptionId,
    ) -> Result<(), DomainError> {
        let question = self
            .questions
            .iter()
            .find(|q| &q.id == question_id)
            .ok_or_else(|| {
                DomainError::validation("question_id", format!("Unknown question {}", question_id))
            })?;
        if !question.has_option(option_id) {
            return Err(DomainError::validation(
                "option_id",
                format!("Option {} does not belong to question {}", option_id, question_id),
            ));
        }
        Ok(())
    }
}

/// One answer inside a response: a chosen option for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub question_id: PollQuestionId,
    pub option_id: PollOptionId,
}

/// A user's submitted response to a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResponse {
    pub id: PollResponseId,
    pub poll_id: PollId,
    pub user_id: UserId,
    pub answers: Vec<PollAnswer>,
    pub submitted_at: Timestamp,
}

/// Vote tally for one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTally {
    pub option_id: PollOptionId,
    pub label: String,
    pub votes: u64,
    pub percentage: Percentage,
}

/// Results for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResults {
    pub question_id: PollQuestionId,
    pub prompt: String,
    pub total_votes: u64,
    pub options: Vec<OptionTally>,
}

impl QuestionResults {
    /// Builds results from per-option raw counts, preserving option order.
    ///
    /// The denominator is the number of answers to this question, so
    /// partially-answered responses don't skew other questions.
    pub fn tally(question: &PollQuestion, counts: &[(PollOptionId, u64)]) -> Self {
        let total: u64 = counts.iter().map(|(_, n)| n).sum();
        let options = question
            .options
            .iter()
            .map(|option| {
                let votes = counts
                    .iter()
                    .find(|(id, _)| id == &option.id)
                    .map(|(_, n)| *n)
                    .unwrap_or(0);
                OptionTally {
                    option_id: option.id,
                    label: option.label.clone(),
                    votes,
                    percentage: Percentage::share_of(votes, total),
                }
            })
            .collect();

        Self {
            question_id: question.id,
            prompt: question.prompt.clone(),
            total_votes: total,
            options,
        }
    }
}

/// Full results for a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollResults {
    pub poll_id: PollId,
    pub title: String,
    pub status: PollStatus,
    pub response_count: u64,
    pub questions: Vec<QuestionResults>,
}
