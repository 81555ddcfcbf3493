//! HTTP handlers for poll endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireActor;
use crate::application::handlers::poll::{
    ClosePollHandler, CreatePollCommand, CreatePollHandler, DeletePollHandler, GetPollHandler,
    ListPollsHandler, OpenPollHandler, PollResultsHandler, SubmitResponseCommand,
    SubmitResponseHandler,
};
use crate::domain::foundation::PollId;
use crate::ports::{NotificationRepository, PollRepository, UserRepository};

use super::dto::{
    CreatePollRequest, PollListParams, PollResponseBody, PollResultsResponse, SubmitResponseRequest,
};

/// Shared state for poll endpoints.
#[derive(Clone)]
pub struct PollAppState {
    pub polls: Arc<dyn PollRepository>,
    pub users: Arc<dyn UserRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
}

impl PollAppState {
    fn create_handler(&self) -> CreatePollHandler {
        CreatePollHandler::new(self.polls.clone())
    }

    fn get_handler(&self) -> GetPollHandler {
        GetPollHandler::new(self.polls.clone())
    }

    fn list_handler(&self) -> ListPollsHandler {
        ListPollsHandler::new(self.polls.clone())
    }

    fn open_handler(&self) -> OpenPollHandler {
        OpenPollHandler::new(self.polls.clone(), self.users.clone(), self.notifications.clone())
    }

    fn close_handler(&self) -> ClosePollHandler {
        ClosePollHandler::new(self.polls.clone())
    }

    fn delete_handler(&self) -> DeletePollHandler {
        DeletePollHandler::new(self.polls.clone())
    }

    fn submit_handler(&self) -> SubmitResponseHandler {
        SubmitResponseHandler::new(self.polls.clone())
    }

    fn results_handler(&self) -> PollResultsHandler {
        PollResultsHandler::new(self.polls.clone())
    }
}

/// POST /api/polls - create a draft poll (admin)
pub async fn create_poll(
    State(state): State<PollAppState>,
    RequireActor(actor): RequireActor,
    Json(request): Json<CreatePollRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let opens_at = request.opens_at_timestamp();
    let closes_at = request.closes_at_timestamp();
    let poll = state
        .create_handler()
        .handle(
            CreatePollCommand {
                title: request.title,
                description: request.description,
                opens_at,
                closes_at,
                questions: request
                    .questions
                    .into_iter()
                    .map(|q| (q.prompt, q.options))
                    .collect(),
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(PollResponseBody::from(poll))))
}

/// GET /api/polls - list polls, optionally by status
pub async fn list_polls(
    State(state): State<PollAppState>,
    Query(params): Query<PollListParams>,
) -> impl IntoResponse {
    let polls = state.list_handler().handle(params.status).await;
    let response: Vec<PollResponseBody> = polls.into_iter().map(PollResponseBody::from).collect();
    Json(response)
}

/// GET /api/polls/:id - fetch one poll
pub async fn get_poll(
    State(state): State<PollAppState>,
    Path(poll_id): Path<PollId>,
) -> Result<impl IntoResponse, ApiError> {
    let poll = state.get_handler().handle(poll_id).await?;
    Ok(Json(PollResponseBody::from(poll)))
}

/// POST /api/polls/:id/open - open a draft for responses (admin)
pub async fn open_poll(
    State(state): State<PollAppState>,
    RequireActor(actor): RequireActor,
    Path(poll_id): Path<PollId>,
) -> Result<impl IntoResponse, ApiError> {
    let poll = state.open_handler().handle(poll_id, &actor).await?;
    Ok(Json(PollResponseBody::from(poll)))
}

/// POST /api/polls/:id/close - close an active poll (admin)
pub async fn close_poll(
    State(state): State<PollAppState>,
    RequireActor(actor): RequireActor,
    Path(poll_id): Path<PollId>,
) -> Result<impl IntoResponse, ApiError> {
    let poll = state.close_handler().handle(poll_id, &actor).await?;
    Ok(Json(PollResponseBody::from(poll)))
}

/// DELETE /api/polls/:id - remove a poll and its responses (admin)
pub async fn delete_poll(
    State(state): State<PollAppState>,
    RequireActor(actor): RequireActor,
    Path(poll_id): Path<PollId>,
) -> Result<impl IntoResponse, ApiError> {
    state.delete_handler().handle(poll_id, &actor).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/polls/:id/responses - submit a response
pub async fn submit_response(
    State(state): State<PollAppState>,
    RequireActor(actor): RequireActor,
    Path(poll_id): Path<PollId>,
    Json(request): Json<SubmitResponseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state
        .submit_handler()
        .handle(
            SubmitResponseCommand {
                poll_id,
                answers: request
                    .answers
                    .into_iter()
                    .map(|a| (a.question_id, a.option_id))
                    .collect(),
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/polls/:id/results - tallied counts and percentages
pub async fn poll_results(
    State(state): State<PollAppState>,
    Path(poll_id): Path<PollId>,
) -> Result<impl IntoResponse, ApiError> {
    let results = state.results_handler().handle(poll_id).await?;
    Ok(Json(PollResultsResponse(results)))
}
