//! Axum router for poll endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    close_poll, create_poll, delete_poll, get_poll, list_polls, open_poll, poll_results,
    submit_response, PollAppState,
};

/// Create the poll API router, for mounting at `/api/polls`.
///
/// - `POST /` - create a draft poll (admin)
/// - `GET /` - list polls, optionally by status
/// - `GET /:id` - fetch one poll
/// - `POST /:id/open` - open a draft for responses (admin)
/// - `POST /:id/close` - close an active poll (admin)
/// - `DELETE /:id` - remove a poll and its responses (admin)
/// - `POST /:id/responses` - submit a response
/// - `GET /:id/results` - tallied counts and percentages
pub fn poll_routes() -> Router<PollAppState> {
    Router::new()
        .route("/", post(create_poll).get(list_polls))
        .route("/:id", get(get_poll).delete(delete_poll))
        .route("/:id/open", post(open_poll))
        .route("/:id/close", post(close_poll))
        .route("/:id/responses", post(submit_response))
        .route("/:id/results", get(poll_results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::notification::tests::MockNotificationRepository;
    use crate::application::handlers::poll::tests::MockPollRepository;
    use crate::application::handlers::user::tests::MockUserRepository;

    #[test]
    fn poll_routes_build() {
        let state = PollAppState {
            polls: Arc::new(MockPollRepository::new()),
            users: Arc::new(MockUserRepository::new()),
            notifications: Arc::new(MockNotificationRepository::new()),
        };
        let _: Router<()> = poll_routes().with_state(state);
    }
}
