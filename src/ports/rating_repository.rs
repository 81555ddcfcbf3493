//! Rating repository port.
//!
//! A user holds at most one rating per leader, so writes go through
//! `upsert` keyed on (user, leader).

use crate::domain::foundation::{DomainError, LeaderId, RatingId, Score, UserId};
use crate::domain::rating::Rating;
use async_trait::async_trait;

/// Repository port for rating persistence.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Inserts or replaces the caller's rating for a leader.
    ///
    /// The conflict key is `(user_id, leader_id)`; an existing rating's
    /// score, tag, and comment are overwritten in place.
    async fn upsert(&self, rating: &Rating) -> Result<(), DomainError>;

    /// Finds a rating by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &RatingId) -> Result<Option<Rating>, DomainError>;

    /// Finds a user's rating for a leader. Returns `None` if not found.
    async fn find_by_user_and_leader(
        &self,
        user_id: &UserId,
        leader_id: &LeaderId,
    ) -> Result<Option<Rating>, DomainError>;

    /// Lists all ratings for a leader, newest first.
    async fn list_by_leader(&self, leader_id: &LeaderId) -> Result<Vec<Rating>, DomainError>;

    /// Fetches just the scores for a leader, for summary arithmetic.
    async fn scores_for_leader(&self, leader_id: &LeaderId) -> Result<Vec<Score>, DomainError>;

    /// Deletes a rating.
    ///
    /// # Errors
    ///
    /// - `RatingNotFound` if the rating doesn't exist
    async fn delete(&self, id: &RatingId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RatingRepository) {}
    }
}
