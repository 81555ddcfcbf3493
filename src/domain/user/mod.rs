//! User domain module.
//!
//! Registered site users. Users submit leader profiles, ratings, comments,
//! poll responses, and support tickets; admins review and moderate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Role, Timestamp, UserId, ValidationError};

/// Maximum length for a display name.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// A registered user.
///
/// # Invariants
///
/// - `email` is non-empty and contains an `@`
/// - `display_name` is 1-100 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    display_name: String,
    role: Role,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Creates a new user with the `User` role.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` / `EmptyField` if email or display name fail validation
    pub fn new(id: UserId, email: String, display_name: String) -> Result<Self, DomainError> {
        validate_email(&email)?;
        validate_display_name(&display_name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            email,
            display_name,
            role: Role::User,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        email: String,
        display_name: String,
        role: Role,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            role,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Changes the display name.
    pub fn rename(&mut self, display_name: String) -> Result<(), DomainError> {
        validate_display_name(&display_name)?;
        self.display_name = display_name;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Grants or revokes the admin role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Timestamp::now();
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    if !email.contains('@') {
        return Err(ValidationError::invalid_format("email", "missing '@'"));
    }
    Ok(())
}

fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("display_name"));
    }
    if name.len() > MAX_DISPLAY_NAME_LENGTH {
        return Err(ValidationError::out_of_range(
            "display_name",
            1,
            MAX_DISPLAY_NAME_LENGTH as i32,
            name.len() as i32,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_with_user_role() {
        let user = User::new(UserId::new(), "a@b.cd".into(), "Ada".into()).unwrap();
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.email(), "a@b.cd");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        assert!(User::new(UserId::new(), "nope".into(), "Ada".into()).is_err());
        assert!(User::new(UserId::new(), "".into(), "Ada".into()).is_err());
    }

    #[test]
    fn rename_validates_and_bumps_updated_at() {
        let mut user = User::new(UserId::new(), "a@b.cd".into(), "Ada".into()).unwrap();
        assert!(user.rename("".into()).is_err());
        user.rename("Grace".into()).unwrap();
        assert_eq!(user.display_name(), "Grace");
    }
}
