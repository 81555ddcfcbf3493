//! HTTP handlers for settings and maintenance endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireActor;
use crate::application::handlers::settings::{
    GetSettingsHandler, MaintenanceStatusHandler, UpdateSettingsCommand, UpdateSettingsHandler,
};
use crate::ports::SettingsRepository;

use super::dto::{SettingsResponse, UpdateSettingsRequest};

/// Shared state for settings endpoints.
#[derive(Clone)]
pub struct SettingsAppState {
    pub settings: Arc<dyn SettingsRepository>,
}

impl SettingsAppState {
    fn get_handler(&self) -> GetSettingsHandler {
        GetSettingsHandler::new(self.settings.clone())
    }

    fn update_handler(&self) -> UpdateSettingsHandler {
        UpdateSettingsHandler::new(self.settings.clone())
    }

    fn maintenance_handler(&self) -> MaintenanceStatusHandler {
        MaintenanceStatusHandler::new(self.settings.clone())
    }
}

/// GET /api/settings - current site settings
pub async fn get_settings(State(state): State<SettingsAppState>) -> impl IntoResponse {
    let settings = state.get_handler().handle().await;
    Json(SettingsResponse::from(settings))
}

/// PUT /api/settings - replace the settings row (admin)
pub async fn update_settings(
    State(state): State<SettingsAppState>,
    RequireActor(actor): RequireActor,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = state
        .update_handler()
        .handle(
            UpdateSettingsCommand {
                site_name: request.site_name,
                maintenance: request.maintenance,
            },
            &actor,
        )
        .await?;
    Ok(Json(SettingsResponse::from(settings)))
}

/// GET /api/maintenance - is the site in maintenance right now
pub async fn maintenance_status(State(state): State<SettingsAppState>) -> impl IntoResponse {
    let status = state.maintenance_handler().handle().await;
    Json(status)
}
