//! Handlers for leader-page comments.

use std::sync::Arc;

use crate::domain::foundation::{Actor, CommentId, DomainError, ErrorCode, LeaderId};
use crate::domain::rating::Comment;
use crate::ports::{CommentRepository, LeaderRepository};

/// Command to post a comment on a leader's page.
#[derive(Debug, Clone)]
pub struct PostCommentCommand {
    pub leader_id: LeaderId,
    pub body: String,
}

/// Handler for posting comments. The leader must be approved.
pub struct PostCommentHandler {
    comments: Arc<dyn CommentRepository>,
    leaders: Arc<dyn LeaderRepository>,
}

impl PostCommentHandler {
    pub fn new(comments: Arc<dyn CommentRepository>, leaders: Arc<dyn LeaderRepository>) -> Self {
        Self { comments, leaders }
    }

    pub async fn handle(&self, cmd: PostCommentCommand, actor: &Actor) -> Result<Comment, DomainError> {
        let leader = self
            .leaders
            .find_by_id(&cmd.leader_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LeaderNotFound,
                    format!("Leader not found: {}", cmd.leader_id),
                )
            })?;
        leader.check_ratable()?;

        let comment = Comment::new(CommentId::new(), cmd.leader_id, actor.user_id, cmd.body)?;
        self.comments.create(&comment).await?;
        Ok(comment)
    }
}

/// Command to edit a comment.
#[derive(Debug, Clone)]
pub struct EditCommentCommand {
    pub comment_id: CommentId,
    pub body: String,
}

/// Handler for comment edits. Submitter-or-admin.
pub struct EditCommentHandler {
    repository: Arc<dyn CommentRepository>,
}

impl EditCommentHandler {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EditCommentCommand, actor: &Actor) -> Result<Comment, DomainError> {
        let mut comment = self
            .repository
            .find_by_id(&cmd.comment_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CommentNotFound,
                    format!("Comment not found: {}", cmd.comment_id),
                )
            })?;

        actor.check_can_manage(comment.user_id())?;

        comment.edit(cmd.body)?;
        self.repository.update(&comment).await?;
        Ok(comment)
    }
}

/// Command to delete a comment.
#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub comment_id: CommentId,
}

/// Handler for comment deletion. Submitter-or-admin.
pub struct DeleteCommentHandler {
    repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentHandler {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCommentCommand, actor: &Actor) -> Result<(), DomainError> {
        let comment = self
            .repository
            .find_by_id(&cmd.comment_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CommentNotFound,
                    format!("Comment not found: {}", cmd.comment_id),
                )
            })?;

        actor.check_can_manage(comment.user_id())?;
        self.repository.delete(&cmd.comment_id).await
    }
}

/// Handler listing a leader's comments, newest first.
///
/// Degrades gracefully: a failed read logs and yields an empty list.
pub struct ListCommentsHandler {
    repository: Arc<dyn CommentRepository>,
}

impl ListCommentsHandler {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, leader_id: LeaderId) -> Result<Vec<Comment>, DomainError> {
        match self.repository.list_by_leader(&leader_id).await {
            Ok(comments) => Ok(comments),
            Err(e) => {
                tracing::warn!(error = %e, %leader_id, "comment listing failed, returning empty");
                Ok(Vec::new())
            }
        }
    }
}
