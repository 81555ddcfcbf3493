//! Axum router for settings endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_settings, maintenance_status, update_settings, SettingsAppState};

/// Create the settings API router, for mounting at `/api`.
///
/// - `GET /settings` - current site settings
/// - `PUT /settings` - replace the settings row (admin)
/// - `GET /maintenance` - maintenance status for clients and probes
pub fn settings_routes() -> Router<SettingsAppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/maintenance", get(maintenance_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::settings::tests::MockSettingsRepository;

    #[test]
    fn settings_routes_build() {
        let state = SettingsAppState {
            settings: Arc::new(MockSettingsRepository::new()),
        };
        let _: Router<()> = settings_routes().with_state(state);
    }
}
