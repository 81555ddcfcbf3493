//! Maintenance window status query.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::settings::SiteSettings;
use crate::ports::SettingsRepository;

/// Snapshot of the maintenance state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MaintenanceStatus {
    pub active: bool,
    pub message: Option<String>,
}

/// Handler reporting whether maintenance is currently in effect.
///
/// A missing row or storage failure reports maintenance off, matching
/// the defaults served by the settings read.
pub struct MaintenanceStatusHandler {
    settings: Arc<dyn SettingsRepository>,
}

impl MaintenanceStatusHandler {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn handle(&self) -> MaintenanceStatus {
        let settings = match self.settings.get().await {
            Ok(Some(settings)) => settings,
            Ok(None) => SiteSettings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "maintenance status read failed");
                SiteSettings::default()
            }
        };

        let window = settings.maintenance();
        let active = window.is_active(&Timestamp::now());
        MaintenanceStatus {
            active,
            message: if active { window.message.clone() } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::tests::MockSettingsRepository;
    use crate::domain::settings::MaintenanceWindow;

    fn settings_with(window: MaintenanceWindow) -> SiteSettings {
        SiteSettings::new("Civiscore".into(), window).unwrap()
    }

    #[tokio::test]
    async fn active_window_reports_its_message() {
        let now = Timestamp::now();
        let settings = settings_with(MaintenanceWindow {
            enabled: true,
            starts_at: Some(now.minus_hours(1)),
            ends_at: Some(now.plus_hours(1)),
            message: Some("Back at noon".into()),
        });
        let handler =
            MaintenanceStatusHandler::new(Arc::new(MockSettingsRepository::with(settings)));

        let status = handler.handle().await;
        assert!(status.active);
        assert_eq!(status.message.as_deref(), Some("Back at noon"));
    }

    #[tokio::test]
    async fn window_outside_now_is_inactive() {
        let now = Timestamp::now();
        let settings = settings_with(MaintenanceWindow {
            enabled: true,
            starts_at: Some(now.plus_hours(1)),
            ends_at: None,
            message: Some("soon".into()),
        });
        let handler =
            MaintenanceStatusHandler::new(Arc::new(MockSettingsRepository::with(settings)));

        let status = handler.handle().await;
        assert!(!status.active);
        assert!(status.message.is_none());
    }

    #[tokio::test]
    async fn missing_settings_mean_no_maintenance() {
        let handler = MaintenanceStatusHandler::new(Arc::new(MockSettingsRepository::new()));
        assert!(!handler.handle().await.active);
    }
}
