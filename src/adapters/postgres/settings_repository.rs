//! PostgreSQL implementation of SettingsRepository.
//!
//! The settings table is a singleton keyed on `id = 1`; writes upsert on
//! that key.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::settings::{MaintenanceWindow, SiteSettings};
use crate::ports::SettingsRepository;

/// Fixed primary key of the settings singleton row.
const SETTINGS_ROW_ID: i32 = 1;

/// PostgreSQL implementation of SettingsRepository.
#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    /// Creates a new PostgresSettingsRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn get(&self) -> Result<Option<SiteSettings>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT site_name, maintenance_enabled, maintenance_starts_at,
                   maintenance_ends_at, maintenance_message, updated_at
            FROM site_settings WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch site settings: {}", e),
            )
        })?;

        Ok(row.map(|row| {
            let starts_at: Option<chrono::DateTime<chrono::Utc>> =
                row.get("maintenance_starts_at");
            let ends_at: Option<chrono::DateTime<chrono::Utc>> = row.get("maintenance_ends_at");

            SiteSettings::reconstitute(
                row.get("site_name"),
                MaintenanceWindow {
                    enabled: row.get("maintenance_enabled"),
                    starts_at: starts_at.map(Timestamp::from_datetime),
                    ends_at: ends_at.map(Timestamp::from_datetime),
                    message: row.get("maintenance_message"),
                },
                Timestamp::from_datetime(row.get("updated_at")),
            )
        }))
    }

    async fn upsert(&self, settings: &SiteSettings) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (
                id, site_name, maintenance_enabled, maintenance_starts_at,
                maintenance_ends_at, maintenance_message, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                site_name = EXCLUDED.site_name,
                maintenance_enabled = EXCLUDED.maintenance_enabled,
                maintenance_starts_at = EXCLUDED.maintenance_starts_at,
                maintenance_ends_at = EXCLUDED.maintenance_ends_at,
                maintenance_message = EXCLUDED.maintenance_message,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .bind(settings.site_name())
        .bind(settings.maintenance().enabled)
        .bind(settings.maintenance().starts_at.map(|t| *t.as_datetime()))
        .bind(settings.maintenance().ends_at.map(|t| *t.as_datetime()))
        .bind(&settings.maintenance().message)
        .bind(settings.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert site settings: {}", e),
            )
        })?;

        Ok(())
    }
}
