//! Axum router for user endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    delete_user, get_user, list_users, lookup_user, register_user, update_profile, UserAppState,
};

/// Create the user API router, for mounting at `/api/users`.
///
/// - `POST /` - register a new account
/// - `GET /` - list users (admin)
/// - `GET /lookup?email=` - find a user by email (admin)
/// - `GET /:id` - fetch one user
/// - `PUT /:id` - update a profile (owner or admin)
/// - `DELETE /:id` - delete an account (owner or admin)
pub fn user_routes() -> Router<UserAppState> {
    Router::new()
        .route("/", post(register_user).get(list_users))
        .route("/lookup", get(lookup_user))
        .route(
            "/:id",
            get(get_user).put(update_profile).delete(delete_user),
        )
}
