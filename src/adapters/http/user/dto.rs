//! JSON request/response types for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub display_name: String,
}

/// Request to update the profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
}

/// Email parameter for the lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailLookupParams {
    pub email: String,
}

/// A user as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            display_name: user.display_name().to_string(),
            role: user.role().as_str().to_string(),
            created_at: user.created_at().to_string(),
            updated_at: user.updated_at().to_string(),
        }
    }
}
