//! Identity extractors.
//!
//! Authentication happens upstream (a gateway or session layer); requests
//! arrive with the caller's identity in headers:
//!
//! ```text
//! X-User-Id: <uuid>
//! X-User-Role: user | admin
//! ```
//!
//! `RequireActor` rejects requests without a parseable identity with 401.
//! Handlers enforce ownership and admin rules themselves via `Actor`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{Actor, Role, UserId};

/// Extractor that requires a caller identity.
#[derive(Debug, Clone)]
pub struct RequireActor(pub Actor);

impl<S> axum::extract::FromRequestParts<S> for RequireActor
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<UserId>().ok())
                .ok_or(IdentityRejection::Unidentified)?;

            // An absent or malformed role header degrades to the least
            // privileged role rather than rejecting the request.
            let role = parts
                .headers
                .get("X-User-Role")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<Role>().ok())
                .unwrap_or(Role::User);

            Ok(RequireActor(Actor::new(user_id, role)))
        })
    }
}

/// Extractor for endpoints usable with or without an identity.
#[derive(Debug, Clone)]
pub struct OptionalActor(pub Option<Actor>);

impl<S> axum::extract::FromRequestParts<S> for OptionalActor
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let actor = <RequireActor as axum::extract::FromRequestParts<S>>::from_request_parts(
                parts, state,
            )
            .await
            .ok()
            .map(|RequireActor(actor)| actor);
            Ok(OptionalActor(actor))
        })
    }
}

/// Rejection for requests without a usable identity.
#[derive(Debug, Clone)]
pub enum IdentityRejection {
    Unidentified,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("UNAUTHORIZED", "Caller identity required");
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
