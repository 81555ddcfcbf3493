//! PostgreSQL implementation of PollRepository.
//!
//! Polls and responses are written transactionally so a poll never exists
//! without its questions and options, and a response never exists without
//! its answers.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, PollId, PollOptionId, PollQuestionId, PollResponseId, Timestamp,
    UserId,
};
use crate::domain::poll::{Poll, PollOption, PollQuestion, PollResponse, PollStatus};
use crate::ports::PollRepository;

// Answer rows have no domain identity; their ids are minted app-side so the
// insert works on any Postgres without pgcrypto.
const INSERT_ANSWER_SQL: &str = r#"
    INSERT INTO poll_answers (id, response_id, question_id, option_id)
    VALUES ($1, $2, $3, $4)
"#;

/// PostgreSQL implementation of PollRepository.
#[derive(Clone)]
pub struct PostgresPollRepository {
    pool: PgPool,
}

impl PostgresPollRepository {
    /// Creates a new PostgresPollRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads questions and options for a set of polls, in position order.
    async fn load_questions(&self, poll_id: &PollId) -> Result<Vec<PollQuestion>, DomainError> {
        let question_rows = sqlx::query(
            r#"
            SELECT id, poll_id, prompt, position
            FROM poll_questions
            WHERE poll_id = $1
            ORDER BY position
            "#,
        )
        .bind(poll_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch poll questions: {}", e),
            )
        })?;

        let mut questions = Vec::with_capacity(question_rows.len());
        for row in question_rows {
            let question_id = PollQuestionId::from_uuid(row.get("id"));
            let option_rows = sqlx::query(
                r#"
                SELECT id, question_id, label, position
                FROM poll_options
                WHERE question_id = $1
                ORDER BY position
                "#,
            )
            .bind(question_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch poll options: {}", e),
                )
            })?;

            let options = option_rows
                .into_iter()
                .map(|o| PollOption {
                    id: PollOptionId::from_uuid(o.get("id")),
                    question_id,
                    label: o.get("label"),
                    position: o.get("position"),
                })
                .collect();

            questions.push(PollQuestion {
                id: question_id,
                poll_id: *poll_id,
                prompt: row.get("prompt"),
                position: row.get("position"),
                options,
            });
        }

        Ok(questions)
    }
}

#[async_trait]
impl PollRepository for PostgresPollRepository {
    async fn create(&self, poll: &Poll) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO polls (
                id, title, description, status, created_by, opens_at, closes_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(poll.id().as_uuid())
        .bind(poll.title())
        .bind(poll.description())
        .bind(poll.status().as_str())
        .bind(poll.created_by().as_uuid())
        .bind(poll.opens_at().map(|t| *t.as_datetime()))
        .bind(poll.closes_at().map(|t| *t.as_datetime()))
        .bind(poll.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert poll: {}", e),
            )
        })?;

        for question in poll.questions() {
            sqlx::query(
                "INSERT INTO poll_questions (id, poll_id, prompt, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(question.id.as_uuid())
            .bind(poll.id().as_uuid())
            .bind(&question.prompt)
            .bind(question.position)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert poll question: {}", e),
                )
            })?;

            for option in &question.options {
                sqlx::query(
                    "INSERT INTO poll_options (id, question_id, label, position) VALUES ($1, $2, $3, $4)",
                )
                .bind(option.id.as_uuid())
                .bind(question.id.as_uuid())
                .bind(&option.label)
                .bind(option.position)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to insert poll option: {}", e),
                    )
                })?;
            }
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit poll: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, poll: &Poll) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE polls SET
                title = $2,
                description = $3,
                status = $4,
                opens_at = $5,
                closes_at = $6
            WHERE id = $1
            "#,
        )
        .bind(poll.id().as_uuid())
        .bind(poll.title())
        .bind(poll.description())
        .bind(poll.status().as_str())
        .bind(poll.opens_at().map(|t| *t.as_datetime()))
        .bind(poll.closes_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update poll: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PollNotFound,
                format!("Poll not found: {}", poll.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &PollId) -> Result<Option<Poll>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, status, created_by, opens_at, closes_at, created_at
            FROM polls WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch poll: {}", e),
            )
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let questions = self.load_questions(id).await?;
        Ok(Some(row_to_poll(row, questions)?))
    }

    async fn list(&self, status: Option<PollStatus>) -> Result<Vec<Poll>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, status, created_by, opens_at, closes_at, created_at
            FROM polls
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list polls: {}", e),
            )
        })?;

        let mut polls = Vec::with_capacity(rows.len());
        for row in rows {
            let poll_id = PollId::from_uuid(row.get("id"));
            let questions = self.load_questions(&poll_id).await?;
            polls.push(row_to_poll(row, questions)?);
        }

        Ok(polls)
    }

    async fn create_response(&self, response: &PollResponse) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        sqlx::query(
            "INSERT INTO poll_responses (id, poll_id, user_id, submitted_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(response.id.as_uuid())
        .bind(response.poll_id.as_uuid())
        .bind(response.user_id.as_uuid())
        .bind(response.submitted_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map(|d| d.is_unique_violation())
                .unwrap_or(false)
            {
                DomainError::new(
                    ErrorCode::AlreadyResponded,
                    "User has already responded to this poll",
                )
            } else {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert poll response: {}", e),
                )
            }
        })?;

        for answer in &response.answers {
            sqlx::query(INSERT_ANSWER_SQL)
                .bind(uuid::Uuid::new_v4())
                .bind(response.id.as_uuid())
                .bind(answer.question_id.as_uuid())
                .bind(answer.option_id.as_uuid())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to insert poll answer: {}", e),
                    )
                })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit poll response: {}", e),
            )
        })?;

        Ok(())
    }

    async fn has_responded(&self, poll_id: &PollId, user_id: &UserId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM poll_responses WHERE poll_id = $1 AND user_id = $2",
        )
        .bind(poll_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check poll response: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn count_responses(&self, poll_id: &PollId) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM poll_responses WHERE poll_id = $1")
                .bind(poll_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to count poll responses: {}", e),
                    )
                })?;

        Ok(result.0 as u64)
    }

    async fn answer_counts(
        &self,
        poll_id: &PollId,
    ) -> Result<Vec<(PollQuestionId, PollOptionId, u64)>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT a.question_id, a.option_id, COUNT(*) as votes
            FROM poll_answers a
            JOIN poll_responses r ON r.id = a.response_id
            WHERE r.poll_id = $1
            GROUP BY a.question_id, a.option_id
            "#,
        )
        .bind(poll_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to tally poll answers: {}", e),
            )
        })?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let votes: i64 = row.get("votes");
                (
                    PollQuestionId::from_uuid(row.get("question_id")),
                    PollOptionId::from_uuid(row.get("option_id")),
                    votes as u64,
                )
            })
            .collect())
    }

    async fn delete(&self, id: &PollId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM polls WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete poll: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PollNotFound,
                format!("Poll not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_poll(
    row: sqlx::postgres::PgRow,
    questions: Vec<PollQuestion>,
) -> Result<Poll, DomainError> {
    let status_str: String = row.get("status");
    let status: PollStatus = status_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;

    let opens_at: Option<chrono::DateTime<chrono::Utc>> = row.get("opens_at");
    let closes_at: Option<chrono::DateTime<chrono::Utc>> = row.get("closes_at");

    Ok(Poll::reconstitute(
        PollId::from_uuid(row.get("id")),
        row.get("title"),
        row.get("description"),
        status,
        UserId::from_uuid(row.get("created_by")),
        opens_at.map(Timestamp::from_datetime),
        closes_at.map(Timestamp::from_datetime),
        questions,
        Timestamp::from_datetime(row.get("created_at")),
    ))
}

#[cfg(test)]
mod tests {
    use super::INSERT_ANSWER_SQL;

    // Ids come from Uuid::new_v4 like every other row in the schema, so
    // the answer insert must take the id as its first parameter instead
    // of calling a server-side generator.
    #[test]
    fn answer_insert_takes_an_app_generated_id() {
        assert!(!INSERT_ANSWER_SQL.contains("gen_random_uuid"));
        for placeholder in ["$1", "$2", "$3", "$4"] {
            assert!(INSERT_ANSWER_SQL.contains(placeholder));
        }
    }
}
