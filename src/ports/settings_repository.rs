//! Site settings repository port.
//!
//! The settings table holds a single row; reads of a missing row are the
//! caller's concern (the application layer substitutes the defaults).

use crate::domain::foundation::DomainError;
use crate::domain::settings::SiteSettings;
use async_trait::async_trait;

/// Repository port for the site settings singleton.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Fetches the settings row. Returns `None` if none has been saved.
    async fn get(&self) -> Result<Option<SiteSettings>, DomainError>;

    /// Inserts or replaces the settings row (upsert on the singleton key).
    async fn upsert(&self, settings: &SiteSettings) -> Result<(), DomainError>;
}
