//! HTTP handlers for notification endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireActor;
use crate::application::handlers::notification::{
    DeleteNotificationHandler, ListNotificationsHandler, MarkAllReadHandler,
    MarkNotificationReadHandler, NotifyUserCommand, NotifyUserHandler, UnreadCountHandler,
};
use crate::domain::foundation::NotificationId;
use crate::ports::NotificationRepository;

use super::dto::{
    InboxParams, MarkAllReadResponse, NotificationResponse, NotifyUserRequest, UnreadCountResponse,
};

/// Shared state for notification endpoints.
#[derive(Clone)]
pub struct NotificationAppState {
    pub notifications: Arc<dyn NotificationRepository>,
}

impl NotificationAppState {
    fn notify_handler(&self) -> NotifyUserHandler {
        NotifyUserHandler::new(self.notifications.clone())
    }

    fn list_handler(&self) -> ListNotificationsHandler {
        ListNotificationsHandler::new(self.notifications.clone())
    }

    fn unread_handler(&self) -> UnreadCountHandler {
        UnreadCountHandler::new(self.notifications.clone())
    }

    fn mark_read_handler(&self) -> MarkNotificationReadHandler {
        MarkNotificationReadHandler::new(self.notifications.clone())
    }

    fn mark_all_handler(&self) -> MarkAllReadHandler {
        MarkAllReadHandler::new(self.notifications.clone())
    }

    fn delete_handler(&self) -> DeleteNotificationHandler {
        DeleteNotificationHandler::new(self.notifications.clone())
    }
}

/// POST /api/notifications - send a notification to a user (admin)
pub async fn notify_user(
    State(state): State<NotificationAppState>,
    RequireActor(actor): RequireActor,
    Json(request): Json<NotifyUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = state
        .notify_handler()
        .handle(
            NotifyUserCommand {
                user_id: request.user_id,
                kind: request.kind,
                title: request.title,
                body: request.body,
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(NotificationResponse::from(notification))))
}

/// GET /api/notifications - the caller's inbox
pub async fn list_notifications(
    State(state): State<NotificationAppState>,
    RequireActor(actor): RequireActor,
    Query(params): Query<InboxParams>,
) -> impl IntoResponse {
    let notifications = state.list_handler().handle(&actor, params.unread_only).await;
    let response: Vec<NotificationResponse> =
        notifications.into_iter().map(NotificationResponse::from).collect();
    Json(response)
}

/// GET /api/notifications/unread-count - unread badge count
pub async fn unread_count(
    State(state): State<NotificationAppState>,
    RequireActor(actor): RequireActor,
) -> impl IntoResponse {
    let unread = state.unread_handler().handle(&actor).await;
    Json(UnreadCountResponse { unread })
}

/// POST /api/notifications/:id/read - mark one notification read
pub async fn mark_read(
    State(state): State<NotificationAppState>,
    RequireActor(actor): RequireActor,
    Path(notification_id): Path<NotificationId>,
) -> Result<impl IntoResponse, ApiError> {
    state.mark_read_handler().handle(notification_id, &actor).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/notifications/read-all - mark the whole inbox read
pub async fn mark_all_read(
    State(state): State<NotificationAppState>,
    RequireActor(actor): RequireActor,
) -> Result<impl IntoResponse, ApiError> {
    let marked = state.mark_all_handler().handle(&actor).await?;
    Ok(Json(MarkAllReadResponse { marked }))
}

/// DELETE /api/notifications/:id - remove a notification
pub async fn delete_notification(
    State(state): State<NotificationAppState>,
    RequireActor(actor): RequireActor,
    Path(notification_id): Path<NotificationId>,
) -> Result<impl IntoResponse, ApiError> {
    state.delete_handler().handle(notification_id, &actor).await?;
    Ok(StatusCode::NO_CONTENT)
}
