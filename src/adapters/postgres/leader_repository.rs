//! PostgreSQL implementation of LeaderRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, LeaderId, Timestamp, UserId};
use crate::domain::leader::{ApprovalStatus, Leader, LeaderProfile};
use crate::ports::{LeaderFilter, LeaderRepository};

const LEADER_COLUMNS: &str = "id, full_name, office, region, party, bio, photo_url, \
     approval_status, submitted_by, created_at, updated_at";

/// PostgreSQL implementation of LeaderRepository.
#[derive(Clone)]
pub struct PostgresLeaderRepository {
    pool: PgPool,
}

impl PostgresLeaderRepository {
    /// Creates a new PostgresLeaderRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaderRepository for PostgresLeaderRepository {
    async fn create(&self, leader: &Leader) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO leaders (
                id, full_name, office, region, party, bio, photo_url,
                approval_status, submitted_by, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(leader.id().as_uuid())
        .bind(&leader.profile().full_name)
        .bind(&leader.profile().office)
        .bind(&leader.profile().region)
        .bind(&leader.profile().party)
        .bind(&leader.profile().bio)
        .bind(&leader.profile().photo_url)
        .bind(leader.approval_status().as_str())
        .bind(leader.submitted_by().as_uuid())
        .bind(leader.created_at().as_datetime())
        .bind(leader.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert leader: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, leader: &Leader) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE leaders SET
                full_name = $2,
                office = $3,
                region = $4,
                party = $5,
                bio = $6,
                photo_url = $7,
                approval_status = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(leader.id().as_uuid())
        .bind(&leader.profile().full_name)
        .bind(&leader.profile().office)
        .bind(&leader.profile().region)
        .bind(&leader.profile().party)
        .bind(&leader.profile().bio)
        .bind(&leader.profile().photo_url)
        .bind(leader.approval_status().as_str())
        .bind(leader.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update leader: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::LeaderNotFound,
                format!("Leader not found: {}", leader.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &LeaderId) -> Result<Option<Leader>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM leaders WHERE id = $1",
            LEADER_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch leader: {}", e),
            )
        })?;

        row.map(row_to_leader).transpose()
    }

    async fn list_by_status(
        &self,
        status: ApprovalStatus,
        filter: &LeaderFilter,
    ) -> Result<Vec<Leader>, DomainError> {
        // region/office filters are optional; NULL parameters disable them.
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM leaders
            WHERE approval_status = $1
              AND ($2::text IS NULL OR region = $2)
              AND ($3::text IS NULL OR office = $3)
            ORDER BY created_at DESC
            "#,
            LEADER_COLUMNS
        ))
        .bind(status.as_str())
        .bind(&filter.region)
        .bind(&filter.office)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list leaders: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_leader).collect()
    }

    async fn delete(&self, id: &LeaderId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM leaders WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete leader: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::LeaderNotFound,
                format!("Leader not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_leader(row: sqlx::postgres::PgRow) -> Result<Leader, DomainError> {
    let status_str: String = row.get("approval_status");
    let status: ApprovalStatus = status_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;

    let profile = LeaderProfile {
        full_name: row.get("full_name"),
        office: row.get("office"),
        region: row.get("region"),
        party: row.get("party"),
        bio: row.get("bio"),
        photo_url: row.get("photo_url"),
    };

    Ok(Leader::reconstitute(
        LeaderId::from_uuid(row.get("id")),
        profile,
        status,
        UserId::from_uuid(row.get("submitted_by")),
        Timestamp::from_datetime(row.get("created_at")),
        Timestamp::from_datetime(row.get("updated_at")),
    ))
}
