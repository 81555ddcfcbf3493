//! JSON request/response types for settings endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::settings::{MaintenanceWindow, SiteSettings};

/// Request replacing the whole settings row (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsRequest {
    pub site_name: String,
    #[serde(default)]
    pub maintenance: MaintenanceWindow,
}

/// The settings singleton as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub site_name: String,
    pub maintenance: MaintenanceWindow,
    pub updated_at: String,
}

impl From<SiteSettings> for SettingsResponse {
    fn from(settings: SiteSettings) -> Self {
        Self {
            site_name: settings.site_name().to_string(),
            maintenance: settings.maintenance().clone(),
            updated_at: settings.updated_at().to_string(),
        }
    }
}
