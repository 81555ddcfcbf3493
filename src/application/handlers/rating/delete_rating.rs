//! DeleteRatingHandler - removes a rating.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, RatingId};
use crate::ports::RatingRepository;

/// Command to delete a rating.
#[derive(Debug, Clone)]
pub struct DeleteRatingCommand {
    pub rating_id: RatingId,
}

/// Handler for rating deletion.
///
/// The rating's submitter or an admin may delete it.
pub struct DeleteRatingHandler {
    repository: Arc<dyn RatingRepository>,
}

impl DeleteRatingHandler {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRatingCommand, actor: &Actor) -> Result<(), DomainError> {
        let rating = self
            .repository
            .find_by_id(&cmd.rating_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RatingNotFound,
                    format!("Rating not found: {}", cmd.rating_id),
                )
            })?;

        actor.check_can_manage(rating.user_id())?;
        self.repository.delete(&cmd.rating_id).await
    }
}
