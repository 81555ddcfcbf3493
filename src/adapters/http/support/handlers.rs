//! HTTP handlers for support ticket endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{OptionalActor, RequireActor};
use crate::application::handlers::support::{
    GetTicketHandler, ListOwnTicketsHandler, ListTicketsHandler, OpenTicketCommand,
    OpenTicketHandler, ReplyTicketCommand, ReplyTicketHandler, TicketStatsHandler,
    UpdateTicketStatusCommand, UpdateTicketStatusHandler,
};
use crate::domain::foundation::TicketId;
use crate::ports::{NotificationRepository, SupportRepository};

use super::dto::{
    MessageResponse, OpenTicketRequest, ReplyTicketRequest, TicketListParams, TicketResponse,
    TicketThreadResponse, UpdateTicketStatusRequest,
};

/// Shared state for support endpoints.
#[derive(Clone)]
pub struct SupportAppState {
    pub tickets: Arc<dyn SupportRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
}

impl SupportAppState {
    fn open_handler(&self) -> OpenTicketHandler {
        OpenTicketHandler::new(self.tickets.clone())
    }

    fn get_handler(&self) -> GetTicketHandler {
        GetTicketHandler::new(self.tickets.clone())
    }

    fn list_handler(&self) -> ListTicketsHandler {
        ListTicketsHandler::new(self.tickets.clone())
    }

    fn own_handler(&self) -> ListOwnTicketsHandler {
        ListOwnTicketsHandler::new(self.tickets.clone())
    }

    fn status_handler(&self) -> UpdateTicketStatusHandler {
        UpdateTicketStatusHandler::new(self.tickets.clone())
    }

    fn reply_handler(&self) -> ReplyTicketHandler {
        ReplyTicketHandler::new(self.tickets.clone(), self.notifications.clone())
    }

    fn stats_handler(&self) -> TicketStatsHandler {
        TicketStatsHandler::new(self.tickets.clone())
    }
}

/// POST /api/tickets - open a ticket, with or without an account
pub async fn open_ticket(
    State(state): State<SupportAppState>,
    OptionalActor(actor): OptionalActor,
    Json(request): Json<OpenTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ticket = state
        .open_handler()
        .handle(OpenTicketCommand {
            user_id: actor.map(|a| a.user_id),
            email: request.email,
            subject: request.subject,
            body: request.body,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(TicketResponse::from(ticket))))
}

/// GET /api/tickets - the admin queue, optionally by status
pub async fn list_tickets(
    State(state): State<SupportAppState>,
    RequireActor(actor): RequireActor,
    Query(params): Query<TicketListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let tickets = state.list_handler().handle(params.status, &actor).await?;
    let response: Vec<TicketResponse> = tickets.into_iter().map(TicketResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/tickets/mine - the caller's own tickets
pub async fn list_own_tickets(
    State(state): State<SupportAppState>,
    RequireActor(actor): RequireActor,
) -> impl IntoResponse {
    let tickets = state.own_handler().handle(&actor).await;
    let response: Vec<TicketResponse> = tickets.into_iter().map(TicketResponse::from).collect();
    Json(response)
}

/// GET /api/tickets/stats - queue counts and resolution time (admin)
pub async fn ticket_stats(
    State(state): State<SupportAppState>,
    RequireActor(actor): RequireActor,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.stats_handler().handle(&actor).await?;
    Ok(Json(stats))
}

/// GET /api/tickets/:id - one ticket with its reply thread
pub async fn get_ticket(
    State(state): State<SupportAppState>,
    RequireActor(actor): RequireActor,
    Path(ticket_id): Path<TicketId>,
) -> Result<impl IntoResponse, ApiError> {
    let thread = state.get_handler().handle(ticket_id, &actor).await?;
    Ok(Json(TicketThreadResponse {
        ticket: TicketResponse::from(thread.ticket),
        messages: thread.messages.into_iter().map(MessageResponse::from).collect(),
    }))
}

/// PUT /api/tickets/:id/status - move a ticket along its lifecycle (admin)
pub async fn update_ticket_status(
    State(state): State<SupportAppState>,
    RequireActor(actor): RequireActor,
    Path(ticket_id): Path<TicketId>,
    Json(request): Json<UpdateTicketStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ticket = state
        .status_handler()
        .handle(
            UpdateTicketStatusCommand {
                ticket_id,
                status: request.status,
            },
            &actor,
        )
        .await?;
    Ok(Json(TicketResponse::from(ticket)))
}

/// POST /api/tickets/:id/replies - post an admin reply
pub async fn reply_ticket(
    State(state): State<SupportAppState>,
    RequireActor(actor): RequireActor,
    Path(ticket_id): Path<TicketId>,
    Json(request): Json<ReplyTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message = state
        .reply_handler()
        .handle(
            ReplyTicketCommand {
                ticket_id,
                body: request.body,
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}
