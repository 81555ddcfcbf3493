//! Site settings domain module.
//!
//! A singleton settings record holding the site name and the
//! admin-configured maintenance window. When the window is active the
//! site reports itself unavailable.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, ValidationError};

/// Default site name used when no settings row exists yet.
pub const DEFAULT_SITE_NAME: &str = "Civiscore";

/// Admin-configured maintenance window.
///
/// Active iff `enabled` and `now` lies within `[starts_at, ends_at]`.
/// An unset bound is unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub enabled: bool,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub message: Option<String>,
}

impl MaintenanceWindow {
    /// Returns true if maintenance is in effect at `now`.
    pub fn is_active(&self, now: &Timestamp) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(starts) = &self.starts_at {
            if now.is_before(starts) {
                return false;
            }
        }
        if let Some(ends) = &self.ends_at {
            if now.is_after(ends) {
                return false;
            }
        }
        true
    }
}

/// The site-wide settings singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    site_name: String,
    maintenance: MaintenanceWindow,
    updated_at: Timestamp,
}

impl SiteSettings {
    /// Creates settings with the given values.
    pub fn new(site_name: String, maintenance: MaintenanceWindow) -> Result<Self, DomainError> {
        if site_name.trim().is_empty() {
            return Err(ValidationError::empty_field("site_name").into());
        }
        Ok(Self {
            site_name,
            maintenance,
            updated_at: Timestamp::now(),
        })
    }

    /// Reconstitutes settings from persistence (no validation).
    pub fn reconstitute(
        site_name: String,
        maintenance: MaintenanceWindow,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            site_name,
            maintenance,
            updated_at,
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn maintenance(&self) -> &MaintenanceWindow {
        &self.maintenance
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

impl Default for SiteSettings {
    /// The built-in defaults served when no settings row exists.
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            maintenance: MaintenanceWindow::default(),
            updated_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_window_is_never_active() {
        let now = Timestamp::now();
        let window = MaintenanceWindow {
            enabled: false,
            starts_at: Some(now.minus_hours(1)),
            ends_at: Some(now.plus_hours(1)),
            message: None,
        };
        assert!(!window.is_active(&now));
    }

    #[test]
    fn bounded_window_checks_both_sides() {
        let now = Timestamp::now();
        let window = MaintenanceWindow {
            enabled: true,
            starts_at: Some(now.minus_hours(1)),
            ends_at: Some(now.plus_hours(1)),
            message: None,
        };
        assert!(window.is_active(&now));
        assert!(!window.is_active(&now.minus_hours(2)));
        assert!(!window.is_active(&now.plus_hours(2)));
    }

    #[test]
    fn unset_bounds_are_unbounded() {
        let now = Timestamp::now();
        let window = MaintenanceWindow {
            enabled: true,
            starts_at: None,
            ends_at: None,
            message: Some("back soon".into()),
        };
        assert!(window.is_active(&now.minus_hours(1000)));
        assert!(window.is_active(&now.plus_hours(1000)));
    }

    #[test]
    fn default_settings_use_builtin_site_name() {
        let settings = SiteSettings::default();
        assert_eq!(settings.site_name(), DEFAULT_SITE_NAME);
        assert!(!settings.maintenance().enabled);
    }

    #[test]
    fn blank_site_name_is_rejected() {
        assert!(SiteSettings::new("  ".into(), MaintenanceWindow::default()).is_err());
    }
}
