//! PostgreSQL implementation of SupportRepository.
//!
//! Stats aggregate in SQL: per-status counts in one grouped query, and the
//! resolution average over tickets carrying a `resolved_at`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    AdminMessageId, DomainError, ErrorCode, TicketId, Timestamp, UserId,
};
use crate::domain::support::{AdminMessage, SupportTicket, TicketStats, TicketStatus};
use crate::ports::SupportRepository;

const TICKET_COLUMNS: &str =
    "id, user_id, email, subject, body, status, created_at, updated_at, resolved_at";

// EXTRACT(EPOCH FROM interval) yields NUMERIC, which f64 cannot decode;
// cast to double precision before the division.
const RESOLUTION_HOURS_SQL: &str = r#"
    SELECT EXTRACT(EPOCH FROM (resolved_at - created_at))::double precision / 3600.0 AS hours
    FROM support_tickets
    WHERE resolved_at IS NOT NULL
"#;

/// PostgreSQL implementation of SupportRepository.
#[derive(Clone)]
pub struct PostgresSupportRepository {
    pool: PgPool,
}

impl PostgresSupportRepository {
    /// Creates a new PostgresSupportRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupportRepository for PostgresSupportRepository {
    async fn create(&self, ticket: &SupportTicket) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO support_tickets (
                id, user_id, email, subject, body, status, created_at, updated_at, resolved_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(ticket.id().as_uuid())
        .bind(ticket.user_id().map(|id| *id.as_uuid()))
        .bind(ticket.email())
        .bind(ticket.subject())
        .bind(ticket.body())
        .bind(ticket.status().as_str())
        .bind(ticket.created_at().as_datetime())
        .bind(ticket.updated_at().as_datetime())
        .bind(ticket.resolved_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert support ticket: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, ticket: &SupportTicket) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE support_tickets SET
                status = $2,
                updated_at = $3,
                resolved_at = $4
            WHERE id = $1
            "#,
        )
        .bind(ticket.id().as_uuid())
        .bind(ticket.status().as_str())
        .bind(ticket.updated_at().as_datetime())
        .bind(ticket.resolved_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update support ticket: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TicketNotFound,
                format!("Ticket not found: {}", ticket.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &TicketId) -> Result<Option<SupportTicket>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM support_tickets WHERE id = $1",
            TICKET_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch support ticket: {}", e),
            )
        })?;

        row.map(row_to_ticket).transpose()
    }

    async fn list(
        &self,
        status: Option<TicketStatus>,
    ) -> Result<Vec<SupportTicket>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM support_tickets
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
            TICKET_COLUMNS
        ))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list support tickets: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_ticket).collect()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<SupportTicket>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM support_tickets WHERE user_id = $1 ORDER BY created_at DESC",
            TICKET_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list user tickets: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_ticket).collect()
    }

    async fn add_message(&self, message: &AdminMessage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO admin_messages (id, ticket_id, author_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.ticket_id.as_uuid())
        .bind(message.author_id.as_uuid())
        .bind(&message.body)
        .bind(message.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert admin message: {}", e),
            )
        })?;

        Ok(())
    }

    async fn list_messages(
        &self,
        ticket_id: &TicketId,
    ) -> Result<Vec<AdminMessage>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, ticket_id, author_id, body, created_at
            FROM admin_messages
            WHERE ticket_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(ticket_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list admin messages: {}", e),
            )
        })?;

        Ok(rows
            .into_iter()
            .map(|row| AdminMessage {
                id: AdminMessageId::from_uuid(row.get("id")),
                ticket_id: TicketId::from_uuid(row.get("ticket_id")),
                author_id: UserId::from_uuid(row.get("author_id")),
                body: row.get("body"),
                created_at: Timestamp::from_datetime(row.get("created_at")),
            })
            .collect())
    }

    async fn stats(&self) -> Result<TicketStats, DomainError> {
        let count_rows = sqlx::query(
            "SELECT status, COUNT(*) as count FROM support_tickets GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count tickets by status: {}", e),
            )
        })?;

        let mut counts = Vec::with_capacity(count_rows.len());
        for row in count_rows {
            let status_str: String = row.get("status");
            let status: TicketStatus = status_str
                .parse()
                .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;
            let count: i64 = row.get("count");
            counts.push((status, count as u64));
        }

        let hour_rows: Vec<(f64,)> = sqlx::query_as(RESOLUTION_HOURS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch resolution times: {}", e),
                )
            })?;

        let hours: Vec<f64> = hour_rows.into_iter().map(|(h,)| h).collect();
        Ok(TicketStats::compute(&counts, &hours))
    }
}

fn row_to_ticket(row: sqlx::postgres::PgRow) -> Result<SupportTicket, DomainError> {
    let status_str: String = row.get("status");
    let status: TicketStatus = status_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;

    let user_id: Option<uuid::Uuid> = row.get("user_id");
    let resolved_at: Option<chrono::DateTime<chrono::Utc>> = row.get("resolved_at");

    Ok(SupportTicket::reconstitute(
        TicketId::from_uuid(row.get("id")),
        user_id.map(UserId::from_uuid),
        row.get("email"),
        row.get("subject"),
        row.get("body"),
        status,
        Timestamp::from_datetime(row.get("created_at")),
        Timestamp::from_datetime(row.get("updated_at")),
        resolved_at.map(Timestamp::from_datetime),
    ))
}
