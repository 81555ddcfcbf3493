//! Caller identity for authorization checks.
//!
//! The HTTP layer trusts identity headers injected by an upstream gateway
//! and hands handlers an `Actor`. Authorization across the whole app is
//! the single owner-or-admin rule: the user who submitted a record, or an
//! admin, may modify it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, UserId};

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// The authenticated caller of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    /// Creates an actor with the given role.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns true if the actor is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Returns true if the actor is the owner of a record or an admin.
    pub fn can_manage(&self, owner: &UserId) -> bool {
        self.is_admin() || &self.user_id == owner
    }

    /// Validates the owner-or-admin rule, returning `Forbidden` otherwise.
    pub fn check_can_manage(&self, owner: &UserId) -> Result<(), DomainError> {
        if self.can_manage(owner) {
            Ok(())
        } else {
            Err(DomainError::forbidden())
        }
    }

    /// Validates that the actor is an admin.
    pub fn check_admin(&self) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::forbidden())
        }
    }
}
