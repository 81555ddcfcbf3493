//! Comment repository port.

use crate::domain::foundation::{CommentId, DomainError, LeaderId};
use crate::domain::rating::Comment;
use async_trait::async_trait;

/// Repository port for leader-page comment persistence.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts a new comment.
    async fn create(&self, comment: &Comment) -> Result<(), DomainError>;

    /// Updates an existing comment's body.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if the comment doesn't exist
    async fn update(&self, comment: &Comment) -> Result<(), DomainError>;

    /// Finds a comment by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, DomainError>;

    /// Lists comments for a leader, newest first.
    async fn list_by_leader(&self, leader_id: &LeaderId) -> Result<Vec<Comment>, DomainError>;

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if the comment doesn't exist
    async fn delete(&self, id: &CommentId) -> Result<(), DomainError>;
}
