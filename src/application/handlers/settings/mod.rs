//! Site settings handlers.

mod get_settings;
mod maintenance_status;
mod update_settings;

pub use get_settings::GetSettingsHandler;
pub use maintenance_status::{MaintenanceStatus, MaintenanceStatusHandler};
pub use update_settings::{UpdateSettingsCommand, UpdateSettingsHandler};
