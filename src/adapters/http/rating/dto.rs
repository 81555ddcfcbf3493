//! JSON request/response types for rating and comment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LeaderId;
use crate::domain::rating::{Comment, Rating, RatingSummary, SocialBehaviour};

/// Request to submit (or replace) a rating for a leader.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRatingRequest {
    pub leader_id: LeaderId,
    pub score: u8,
    pub social_behaviour: SocialBehaviour,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Request to post or edit a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentBodyRequest {
    pub body: String,
}

/// A rating as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub id: String,
    pub user_id: String,
    pub leader_id: String,
    pub score: u8,
    pub social_behaviour: String,
    pub comment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id().to_string(),
            user_id: rating.user_id().to_string(),
            leader_id: rating.leader_id().to_string(),
            score: rating.score().value(),
            social_behaviour: rating.social_behaviour().as_str().to_string(),
            comment: rating.comment().map(str::to_string),
            created_at: rating.created_at().to_string(),
            updated_at: rating.updated_at().to_string(),
        }
    }
}

/// A leader's aggregate rating picture.
#[derive(Debug, Clone, Serialize)]
pub struct RatingSummaryResponse {
    pub leader_id: String,
    pub count: u64,
    pub average: f64,
    /// Percentage of ratings at each score, index 0 = score 1.
    pub distribution: [u8; 5],
}

impl From<RatingSummary> for RatingSummaryResponse {
    fn from(summary: RatingSummary) -> Self {
        Self {
            leader_id: summary.leader_id.to_string(),
            count: summary.count,
            average: summary.average,
            distribution: summary.distribution.map(|p| p.value()),
        }
    }
}

/// A comment as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub leader_id: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            user_id: comment.user_id().to_string(),
            leader_id: comment.leader_id().to_string(),
            body: comment.body().to_string(),
            created_at: comment.created_at().to_string(),
            updated_at: comment.updated_at().to_string(),
        }
    }
}
