//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireActor;
use crate::application::handlers::user::{
    DeleteUserCommand, DeleteUserHandler, GetUserByEmailHandler, GetUserHandler, GetUserQuery,
    ListUsersHandler, RegisterUserCommand, RegisterUserHandler, UpdateProfileCommand,
    UpdateProfileHandler,
};
use crate::domain::foundation::UserId;
use crate::ports::UserRepository;

use super::dto::{EmailLookupParams, RegisterUserRequest, UpdateProfileRequest, UserResponse};

/// Shared state for user endpoints.
#[derive(Clone)]
pub struct UserAppState {
    pub users: Arc<dyn UserRepository>,
}

impl UserAppState {
    fn register_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone())
    }

    fn get_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    fn list_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    fn email_handler(&self) -> GetUserByEmailHandler {
        GetUserByEmailHandler::new(self.users.clone())
    }

    fn update_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.users.clone())
    }

    fn delete_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.users.clone())
    }
}

/// POST /api/users - register a new account
pub async fn register_user(
    State(state): State<UserAppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .register_handler()
        .handle(RegisterUserCommand {
            email: request.email,
            display_name: request.display_name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users/:id - fetch one user
pub async fn get_user(
    State(state): State<UserAppState>,
    Path(user_id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.get_handler().handle(GetUserQuery { user_id }).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users - list all users (admin)
pub async fn list_users(
    State(state): State<UserAppState>,
    RequireActor(actor): RequireActor,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.list_handler().handle(&actor).await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/users/lookup?email= - find a user by email (admin)
pub async fn lookup_user(
    State(state): State<UserAppState>,
    RequireActor(actor): RequireActor,
    Query(params): Query<EmailLookupParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.email_handler().handle(&params.email, &actor).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/:id - update a profile (owner or admin)
pub async fn update_profile(
    State(state): State<UserAppState>,
    RequireActor(actor): RequireActor,
    Path(user_id): Path<UserId>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .update_handler()
        .handle(
            UpdateProfileCommand {
                user_id,
                display_name: request.display_name,
            },
            &actor,
        )
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/:id - delete an account (owner or admin)
pub async fn delete_user(
    State(state): State<UserAppState>,
    RequireActor(actor): RequireActor,
    Path(user_id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_handler()
        .handle(DeleteUserCommand { user_id }, &actor)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
