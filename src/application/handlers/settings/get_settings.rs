//! Site settings read query.

use std::sync::Arc;

use crate::domain::settings::SiteSettings;
use crate::ports::SettingsRepository;

/// Handler fetching the site settings.
///
/// Both a missing row and a storage failure fall back to the built-in
/// defaults so the site keeps rendering.
pub struct GetSettingsHandler {
    settings: Arc<dyn SettingsRepository>,
}

impl GetSettingsHandler {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn handle(&self) -> SiteSettings {
        match self.settings.get().await {
            Ok(Some(settings)) => settings,
            Ok(None) => SiteSettings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "settings read failed");
                SiteSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::tests::MockSettingsRepository;
    use crate::domain::settings::{MaintenanceWindow, DEFAULT_SITE_NAME};

    #[tokio::test]
    async fn missing_row_yields_the_defaults() {
        let handler = GetSettingsHandler::new(Arc::new(MockSettingsRepository::new()));
        let settings = handler.handle().await;
        assert_eq!(settings.site_name(), DEFAULT_SITE_NAME);
        assert!(!settings.maintenance().enabled);
    }

    #[tokio::test]
    async fn saved_row_is_returned() {
        let saved =
            SiteSettings::new("City Watch".into(), MaintenanceWindow::default()).unwrap();
        let handler =
            GetSettingsHandler::new(Arc::new(MockSettingsRepository::with(saved.clone())));
        assert_eq!(handler.handle().await.site_name(), "City Watch");
    }

    #[tokio::test]
    async fn storage_failure_degrades_to_defaults() {
        let handler = GetSettingsHandler::new(Arc::new(MockSettingsRepository::failing()));
        assert_eq!(handler.handle().await.site_name(), DEFAULT_SITE_NAME);
    }
}
