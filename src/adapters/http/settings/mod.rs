//! Settings HTTP module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SettingsAppState;
pub use routes::settings_routes;
