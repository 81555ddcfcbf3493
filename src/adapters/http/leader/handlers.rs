//! HTTP handlers for leader endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireActor;
use crate::application::handlers::leader::{
    DeleteLeaderCommand, DeleteLeaderHandler, GetLeaderHandler, GetLeaderQuery,
    ListLeadersHandler, ListLeadersQuery, ListPendingLeadersHandler, ReviewDecision,
    ReviewLeaderCommand, ReviewLeaderHandler, SubmitLeaderCommand, SubmitLeaderHandler,
    UpdateLeaderCommand, UpdateLeaderHandler,
};
use crate::domain::foundation::{DomainError, LeaderId};
use crate::ports::{LeaderRepository, NotificationRepository};

use super::dto::{LeaderListParams, LeaderProfileRequest, LeaderResponse, ReviewLeaderRequest};

/// Shared state for leader endpoints.
#[derive(Clone)]
pub struct LeaderAppState {
    pub leaders: Arc<dyn LeaderRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
}

impl LeaderAppState {
    fn submit_handler(&self) -> SubmitLeaderHandler {
        SubmitLeaderHandler::new(self.leaders.clone())
    }

    fn review_handler(&self) -> ReviewLeaderHandler {
        ReviewLeaderHandler::new(self.leaders.clone(), self.notifications.clone())
    }

    fn get_handler(&self) -> GetLeaderHandler {
        GetLeaderHandler::new(self.leaders.clone())
    }

    fn list_handler(&self) -> ListLeadersHandler {
        ListLeadersHandler::new(self.leaders.clone())
    }

    fn pending_handler(&self) -> ListPendingLeadersHandler {
        ListPendingLeadersHandler::new(self.leaders.clone())
    }

    fn update_handler(&self) -> UpdateLeaderHandler {
        UpdateLeaderHandler::new(self.leaders.clone())
    }

    fn delete_handler(&self) -> DeleteLeaderHandler {
        DeleteLeaderHandler::new(self.leaders.clone())
    }
}

/// POST /api/leaders - submit a profile for review
pub async fn submit_leader(
    State(state): State<LeaderAppState>,
    RequireActor(actor): RequireActor,
    Json(request): Json<LeaderProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let leader = state
        .submit_handler()
        .handle(
            SubmitLeaderCommand {
                profile: request.into(),
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(LeaderResponse::from(leader))))
}

/// GET /api/leaders - public listing with optional filters
pub async fn list_leaders(
    State(state): State<LeaderAppState>,
    Query(params): Query<LeaderListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let leaders = state
        .list_handler()
        .handle(ListLeadersQuery {
            region: params.region,
            office: params.office,
        })
        .await?;
    let response: Vec<LeaderResponse> = leaders.into_iter().map(LeaderResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/leaders/pending - the review queue (admin)
pub async fn list_pending_leaders(
    State(state): State<LeaderAppState>,
    RequireActor(actor): RequireActor,
) -> Result<impl IntoResponse, ApiError> {
    let leaders = state.pending_handler().handle(&actor).await?;
    let response: Vec<LeaderResponse> = leaders.into_iter().map(LeaderResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/leaders/:id - fetch one leader
pub async fn get_leader(
    State(state): State<LeaderAppState>,
    Path(leader_id): Path<LeaderId>,
) -> Result<impl IntoResponse, ApiError> {
    let leader = state.get_handler().handle(GetLeaderQuery { leader_id }).await?;
    Ok(Json(LeaderResponse::from(leader)))
}

/// POST /api/leaders/:id/review - approve or reject (admin)
pub async fn review_leader(
    State(state): State<LeaderAppState>,
    RequireActor(actor): RequireActor,
    Path(leader_id): Path<LeaderId>,
    Json(request): Json<ReviewLeaderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let decision = match request.decision.as_str() {
        "approve" => ReviewDecision::Approve,
        "reject" => ReviewDecision::Reject,
        other => {
            return Err(DomainError::validation(
                "decision",
                format!("Expected approve or reject, got {}", other),
            )
            .into())
        }
    };

    let leader = state
        .review_handler()
        .handle(ReviewLeaderCommand { leader_id, decision }, &actor)
        .await?;
    Ok(Json(LeaderResponse::from(leader)))
}

/// PUT /api/leaders/:id - edit a profile (submitter or admin)
pub async fn update_leader(
    State(state): State<LeaderAppState>,
    RequireActor(actor): RequireActor,
    Path(leader_id): Path<LeaderId>,
    Json(request): Json<LeaderProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let leader = state
        .update_handler()
        .handle(
            UpdateLeaderCommand {
                leader_id,
                profile: request.into(),
            },
            &actor,
        )
        .await?;
    Ok(Json(LeaderResponse::from(leader)))
}

/// DELETE /api/leaders/:id - remove a leader (admin)
pub async fn delete_leader(
    State(state): State<LeaderAppState>,
    RequireActor(actor): RequireActor,
    Path(leader_id): Path<LeaderId>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_handler()
        .handle(DeleteLeaderCommand { leader_id }, &actor)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
