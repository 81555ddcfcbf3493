//! Axum router for support endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    get_ticket, list_own_tickets, list_tickets, open_ticket, reply_ticket, ticket_stats,
    update_ticket_status, SupportAppState,
};

/// Create the support API router, for mounting at `/api/tickets`.
///
/// - `POST /` - open a ticket, with or without an account
/// - `GET /` - the admin queue, `?status=` to filter
/// - `GET /mine` - the caller's own tickets
/// - `GET /stats` - queue counts and resolution time (admin)
/// - `GET /:id` - one ticket with its reply thread
/// - `PUT /:id/status` - move a ticket along its lifecycle (admin)
/// - `POST /:id/replies` - post an admin reply
pub fn support_routes() -> Router<SupportAppState> {
    Router::new()
        .route("/", post(open_ticket).get(list_tickets))
        .route("/mine", get(list_own_tickets))
        .route("/stats", get(ticket_stats))
        .route("/:id", get(get_ticket))
        .route("/:id/status", put(update_ticket_status))
        .route("/:id/replies", post(reply_ticket))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::notification::tests::MockNotificationRepository;
    use crate::application::handlers::support::tests::MockSupportRepository;

    #[test]
    fn support_routes_build() {
        let state = SupportAppState {
            tickets: Arc::new(MockSupportRepository::new()),
            notifications: Arc::new(MockNotificationRepository::new()),
        };
        let _: Router<()> = support_routes().with_state(state);
    }
}
