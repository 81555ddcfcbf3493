//! Axum router for leader endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    delete_leader, get_leader, list_leaders, list_pending_leaders, review_leader, submit_leader,
    update_leader, LeaderAppState,
};

/// Create the leader API router, for mounting at `/api/leaders`.
///
/// - `POST /` - submit a profile for review
/// - `GET /` - public listing with optional region/office filters
/// - `GET /pending` - the review queue (admin)
/// - `GET /:id` - fetch one leader
/// - `POST /:id/review` - approve or reject (admin)
/// - `PUT /:id` - edit a profile (submitter or admin)
/// - `DELETE /:id` - remove a leader (admin)
pub fn leader_routes() -> Router<LeaderAppState> {
    Router::new()
        .route("/", post(submit_leader).get(list_leaders))
        .route("/pending", get(list_pending_leaders))
        .route(
            "/:id",
            get(get_leader).put(update_leader).delete(delete_leader),
        )
        .route("/:id/review", post(review_leader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::leader::tests::MockLeaderRepository;
    use crate::application::handlers::notification::tests::MockNotificationRepository;

    #[test]
    fn leader_routes_build() {
        let state = LeaderAppState {
            leaders: Arc::new(MockLeaderRepository::new()),
            notifications: Arc::new(MockNotificationRepository::new()),
        };
        let _: Router<()> = leader_routes().with_state(state);
    }
}
