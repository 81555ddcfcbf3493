//! Axum router for notification endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    delete_notification, list_notifications, mark_all_read, mark_read, notify_user, unread_count,
    NotificationAppState,
};

/// Create the notification API router, for mounting at `/api/notifications`.
///
/// - `POST /` - send a notification to a user (admin)
/// - `GET /` - the caller's inbox, `?unread_only=true` to filter
/// - `GET /unread-count` - unread badge count
/// - `POST /:id/read` - mark one notification read
/// - `POST /read-all` - mark the whole inbox read
/// - `DELETE /:id` - remove a notification
pub fn notification_routes() -> Router<NotificationAppState> {
    Router::new()
        .route("/", post(notify_user).get(list_notifications))
        .route("/unread-count", get(unread_count))
        .route("/read-all", post(mark_all_read))
        .route("/:id/read", post(mark_read))
        .route("/:id", delete(delete_notification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::notification::tests::MockNotificationRepository;

    #[test]
    fn notification_routes_build() {
        let state = NotificationAppState {
            notifications: Arc::new(MockNotificationRepository::new()),
        };
        let _: Router<()> = notification_routes().with_state(state);
    }
}
