//! PostgreSQL implementation of RatingRepository.
//!
//! The upsert keys on the `(user_id, leader_id)` unique constraint so a
//! resubmitted rating replaces the old one in place.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, LeaderId, RatingId, Score, Timestamp, UserId,
};
use crate::domain::rating::{Rating, SocialBehaviour};
use crate::ports::RatingRepository;

const RATING_COLUMNS: &str =
    "id, user_id, leader_id, score, social_behaviour, comment, created_at, updated_at";

/// PostgreSQL implementation of RatingRepository.
#[derive(Clone)]
pub struct PostgresRatingRepository {
    pool: PgPool,
}

impl PostgresRatingRepository {
    /// Creates a new PostgresRatingRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PostgresRatingRepository {
    async fn upsert(&self, rating: &Rating) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ratings (
                id, user_id, leader_id, score, social_behaviour, comment,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, leader_id) DO UPDATE SET
                score = EXCLUDED.score,
                social_behaviour = EXCLUDED.social_behaviour,
                comment = EXCLUDED.comment,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(rating.id().as_uuid())
        .bind(rating.user_id().as_uuid())
        .bind(rating.leader_id().as_uuid())
        .bind(rating.score().value() as i16)
        .bind(rating.social_behaviour().as_str())
        .bind(rating.comment())
        .bind(rating.created_at().as_datetime())
        .bind(rating.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert rating: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &RatingId) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE id = $1",
            RATING_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch rating: {}", e),
            )
        })?;

        row.map(row_to_rating).transpose()
    }

    async fn find_by_user_and_leader(
        &self,
        user_id: &UserId,
        leader_id: &LeaderId,
    ) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE user_id = $1 AND leader_id = $2",
            RATING_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .bind(leader_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch rating by user and leader: {}", e),
            )
        })?;

        row.map(row_to_rating).transpose()
    }

    async fn list_by_leader(&self, leader_id: &LeaderId) -> Result<Vec<Rating>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE leader_id = $1 ORDER BY created_at DESC",
            RATING_COLUMNS
        ))
        .bind(leader_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list ratings: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_rating).collect()
    }

    async fn scores_for_leader(&self, leader_id: &LeaderId) -> Result<Vec<Score>, DomainError> {
        let rows: Vec<(i16,)> = sqlx::query_as("SELECT score FROM ratings WHERE leader_id = $1")
            .bind(leader_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch scores: {}", e),
                )
            })?;

        rows.into_iter()
            .map(|(s,)| {
                Score::try_new(s as u8)
                    .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))
            })
            .collect()
    }

    async fn delete(&self, id: &RatingId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete rating: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RatingNotFound,
                format!("Rating not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_rating(row: sqlx::postgres::PgRow) -> Result<Rating, DomainError> {
    let score: i16 = row.get("score");
    let score = Score::try_new(score as u8)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

    let behaviour_str: String = row.get("social_behaviour");
    let behaviour: SocialBehaviour = behaviour_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;

    Ok(Rating::reconstitute(
        RatingId::from_uuid(row.get("id")),
        UserId::from_uuid(row.get("user_id")),
        LeaderId::from_uuid(row.get("leader_id")),
        score,
        behaviour,
        row.get("comment"),
        Timestamp::from_datetime(row.get("created_at")),
        Timestamp::from_datetime(row.get("updated_at")),
    ))
}
