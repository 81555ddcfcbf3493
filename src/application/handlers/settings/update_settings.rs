//! UpdateSettingsHandler - admin upsert of the settings singleton.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError};
use crate::domain::settings::{MaintenanceWindow, SiteSettings};
use crate::ports::SettingsRepository;

/// Command carrying the full replacement settings.
#[derive(Debug, Clone)]
pub struct UpdateSettingsCommand {
    pub site_name: String,
    pub maintenance: MaintenanceWindow,
}

/// Handler for settings updates. Admin only; replaces the whole row.
pub struct UpdateSettingsHandler {
    settings: Arc<dyn SettingsRepository>,
}

impl UpdateSettingsHandler {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSettingsCommand,
        actor: &Actor,
    ) -> Result<SiteSettings, DomainError> {
        actor.check_admin()?;

        let settings = SiteSettings::new(cmd.site_name, cmd.maintenance)?;
        self.settings.upsert(&settings).await?;

        tracing::info!(
            site_name = settings.site_name(),
            maintenance_enabled = settings.maintenance().enabled,
            "site settings updated"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::tests::MockSettingsRepository;
    use crate::domain::foundation::{ErrorCode, Role, UserId};

    #[tokio::test]
    async fn admin_update_replaces_the_row() {
        let repo = Arc::new(MockSettingsRepository::new());
        let handler = UpdateSettingsHandler::new(repo.clone());

        handler
            .handle(
                UpdateSettingsCommand {
                    site_name: "City Watch".into(),
                    maintenance: MaintenanceWindow {
                        enabled: true,
                        ..Default::default()
                    },
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap();

        let saved = repo.saved().unwrap();
        assert_eq!(saved.site_name(), "City Watch");
        assert!(saved.maintenance().enabled);
    }

    #[tokio::test]
    async fn regular_users_cannot_update_settings() {
        let handler = UpdateSettingsHandler::new(Arc::new(MockSettingsRepository::new()));

        let err = handler
            .handle(
                UpdateSettingsCommand {
                    site_name: "Nope".into(),
                    maintenance: MaintenanceWindow::default(),
                },
                &Actor::new(UserId::new(), Role::User),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn blank_site_name_is_rejected() {
        let handler = UpdateSettingsHandler::new(Arc::new(MockSettingsRepository::new()));

        let err = handler
            .handle(
                UpdateSettingsCommand {
                    site_name: "   ".into(),
                    maintenance: MaintenanceWindow::default(),
                },
                &Actor::new(UserId::new(), Role::Admin),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
