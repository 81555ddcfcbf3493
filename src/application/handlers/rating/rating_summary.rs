//! Query handlers for leader ratings.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, LeaderId};
use crate::domain::rating::{Rating, RatingSummary};
use crate::ports::RatingRepository;

/// Query for a leader's aggregate rating.
#[derive(Debug, Clone)]
pub struct RatingSummaryQuery {
    pub leader_id: LeaderId,
}

/// Handler computing a leader's average and distribution.
///
/// Degrades gracefully: a failed read logs and yields the empty summary.
pub struct RatingSummaryHandler {
    repository: Arc<dyn RatingRepository>,
}

impl RatingSummaryHandler {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: RatingSummaryQuery) -> Result<RatingSummary, DomainError> {
        match self.repository.scores_for_leader(&query.leader_id).await {
            Ok(scores) => Ok(RatingSummary::from_scores(query.leader_id, &scores)),
            Err(e) => {
                tracing::warn!(error = %e, leader_id = %query.leader_id, "rating summary failed, returning empty");
                Ok(RatingSummary::empty(query.leader_id))
            }
        }
    }
}

/// Handler listing a leader's individual ratings, newest first.
pub struct ListLeaderRatingsHandler {
    repository: Arc<dyn RatingRepository>,
}

impl ListLeaderRatingsHandler {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, leader_id: LeaderId) -> Result<Vec<Rating>, DomainError> {
        match self.repository.list_by_leader(&leader_id).await {
            Ok(ratings) => Ok(ratings),
            Err(e) => {
                tracing::warn!(error = %e, %leader_id, "rating listing failed, returning empty");
                Ok(Vec::new())
            }
        }
    }
}
