//! Rating domain module.
//!
//! Per-user, per-leader scores with an optional free-text comment and a
//! categorical social-behaviour tag, plus standalone leader-page comments.
//! A user holds at most one rating per leader; resubmitting replaces it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    CommentId, DomainError, LeaderId, Percentage, RatingId, Score, Timestamp, UserId,
    ValidationError,
};

/// Maximum length for rating comment text and leader-page comments.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Categorical tag describing a leader's observed social behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialBehaviour {
    Exemplary,
    Responsive,
    Neutral,
    Unresponsive,
    Corrupt,
}

impl SocialBehaviour {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialBehaviour::Exemplary => "exemplary",
            SocialBehaviour::Responsive => "responsive",
            SocialBehaviour::Neutral => "neutral",
            SocialBehaviour::Unresponsive => "unresponsive",
            SocialBehaviour::Corrupt => "corrupt",
        }
    }
}

impl fmt::Display for SocialBehaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocialBehaviour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exemplary" => Ok(SocialBehaviour::Exemplary),
            "responsive" => Ok(SocialBehaviour::Responsive),
            "neutral" => Ok(SocialBehaviour::Neutral),
            "unresponsive" => Ok(SocialBehaviour::Unresponsive),
            "corrupt" => Ok(SocialBehaviour::Corrupt),
            other => Err(format!("unknown social behaviour: {}", other)),
        }
    }
}

/// A per-user, per-leader rating.
///
/// # Invariants
///
/// - `score` is 1-5
/// - at most one rating per (user, leader) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    id: RatingId,
    user_id: UserId,
    leader_id: LeaderId,
    score: Score,
    social_behaviour: SocialBehaviour,
    comment: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Rating {
    /// Creates a new rating.
    pub fn new(
        id: RatingId,
        user_id: UserId,
        leader_id: LeaderId,
        score: Score,
        social_behaviour: SocialBehaviour,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        if let Some(text) = &comment {
            validate_comment_body(text)?;
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            leader_id,
            score,
            social_behaviour,
            comment,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a rating from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RatingId,
        user_id: UserId,
        leader_id: LeaderId,
        score: Score,
        social_behaviour: SocialBehaviour,
        comment: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            leader_id,
            score,
            social_behaviour,
            comment,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &RatingId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn leader_id(&self) -> &LeaderId {
        &self.leader_id
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn social_behaviour(&self) -> SocialBehaviour {
        self.social_behaviour
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

/// A standalone comment on a leader's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    leader_id: LeaderId,
    user_id: UserId,
    body: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Comment {
    /// Creates a new comment.
    pub fn new(
        id: CommentId,
        leader_id: LeaderId,
        user_id: UserId,
        body: String,
    ) -> Result<Self, DomainError> {
        validate_comment_body(&body)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            leader_id,
            user_id,
            body,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a comment from persistence (no validation).
    pub fn reconstitute(
        id: CommentId,
        leader_id: LeaderId,
        user_id: UserId,
        body: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            leader_id,
            user_id,
            body,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn leader_id(&self) -> &LeaderId {
        &self.leader_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replaces the comment body.
    pub fn edit(&mut self, body: String) -> Result<(), DomainError> {
        validate_comment_body(&body)?;
        self.body = body;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

/// Aggregated rating view for a leader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub leader_id: LeaderId,
    pub count: u64,
    /// Mean score rounded to two decimals; 0.0 when there are no ratings.
    pub average: f64,
    /// Share of ratings at each score 1..=5, nearest-integer percentages.
    pub distribution: [Percentage; 5],
}

impl RatingSummary {
    /// Summary for a leader with no ratings yet.
    pub fn empty(leader_id: LeaderId) -> Self {
        Self {
            leader_id,
            count: 0,
            average: 0.0,
            distribution: [Percentage::ZERO; 5],
        }
    }

    /// Builds a summary from raw scores.
    pub fn from_scores(leader_id: LeaderId, scores: &[Score]) -> Self {
        if scores.is_empty() {
            return Self::empty(leader_id);
        }

        let mut buckets = [0u64; 5];
        for score in scores {
            buckets[(score.value() - 1) as usize] += 1;
        }
        let total = scores.len() as u64;
        let distribution =
            buckets.map(|count| Percentage::share_of(count, total));

        Self {
            leader_id,
            count: total,
            average: Score::average(scores),
            distribution,
        }
    }
}

fn validate_comment_body(body: &str) -> Result<(), ValidationError> {
    if body.trim().is_empty() {
        return Err(ValidationError::empty_field("comment"));
    }
    if body.len() > MAX_COMMENT_LENGTH {
        return Err(ValidationError::out_of_range(
            "comment",
            1,
            MAX_COMMENT_LENGTH as i32,
            body.len() as i32,
        ));
    }
    Ok(())
}
