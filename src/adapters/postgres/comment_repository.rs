//! PostgreSQL implementation of CommentRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CommentId, DomainError, ErrorCode, LeaderId, Timestamp, UserId};
use crate::domain::rating::Comment;
use crate::ports::CommentRepository;

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    /// Creates a new PostgresCommentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, leader_id, user_id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id().as_uuid())
        .bind(comment.leader_id().as_uuid())
        .bind(comment.user_id().as_uuid())
        .bind(comment.body())
        .bind(comment.created_at().as_datetime())
        .bind(comment.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert comment: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, comment: &Comment) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE comments SET body = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(comment.id().as_uuid())
        .bind(comment.body())
        .bind(comment.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update comment: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CommentNotFound,
                format!("Comment not found: {}", comment.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query(
            "SELECT id, leader_id, user_id, body, created_at, updated_at FROM comments WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch comment: {}", e),
            )
        })?;

        Ok(row.map(row_to_comment))
    }

    async fn list_by_leader(&self, leader_id: &LeaderId) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, leader_id, user_id, body, created_at, updated_at
            FROM comments
            WHERE leader_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(leader_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list comments: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_comment).collect())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete comment: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CommentNotFound,
                format!("Comment not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_comment(row: sqlx::postgres::PgRow) -> Comment {
    Comment::reconstitute(
        CommentId::from_uuid(row.get("id")),
        LeaderId::from_uuid(row.get("leader_id")),
        UserId::from_uuid(row.get("user_id")),
        row.get("body"),
        Timestamp::from_datetime(row.get("created_at")),
        Timestamp::from_datetime(row.get("updated_at")),
    )
}
