//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `api_router` assembles them under `/api`.

pub mod error;
pub mod middleware;

pub mod leader;
pub mod notification;
pub mod poll;
pub mod rating;
pub mod settings;
pub mod support;
pub mod user;

use axum::routing::get;
use axum::{Json, Router};

pub use leader::{leader_routes, LeaderAppState};
pub use notification::{notification_routes, NotificationAppState};
pub use poll::{poll_routes, PollAppState};
pub use rating::{leader_rating_routes, rating_routes, RatingAppState};
pub use settings::{settings_routes, SettingsAppState};
pub use support::{support_routes, SupportAppState};
pub use user::{user_routes, UserAppState};

/// The per-module states the API is assembled from.
#[derive(Clone)]
pub struct AppStates {
    pub users: UserAppState,
    pub leaders: LeaderAppState,
    pub ratings: RatingAppState,
    pub polls: PollAppState,
    pub notifications: NotificationAppState,
    pub settings: SettingsAppState,
    pub support: SupportAppState,
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Assembles the full application router.
///
/// Everything lives under `/api` except the health probe. The
/// leader-scoped rating reads are merged into the `/leaders` subtree so
/// the two modules share the path space without a routing conflict.
pub fn api_router(states: AppStates) -> Router {
    let leaders = leader_routes()
        .with_state(states.leaders)
        .merge(leader_rating_routes().with_state(states.ratings.clone()));

    let api = Router::new()
        .nest("/users", user_routes().with_state(states.users))
        .nest("/leaders", leaders)
        .nest("/polls", poll_routes().with_state(states.polls))
        .nest(
            "/notifications",
            notification_routes().with_state(states.notifications),
        )
        .nest("/tickets", support_routes().with_state(states.support))
        .merge(settings_routes().with_state(states.settings))
        .merge(rating_routes().with_state(states.ratings));

    Router::new().route("/health", get(health)).nest("/api", api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::leader::tests::MockLeaderRepository;
    use crate::application::handlers::notification::tests::MockNotificationRepository;
    use crate::application::handlers::poll::tests::MockPollRepository;
    use crate::application::handlers::rating::tests::{
        MockCommentRepository, MockRatingRepository,
    };
    use crate::application::handlers::settings::tests::MockSettingsRepository;
    use crate::application::handlers::support::tests::MockSupportRepository;
    use crate::application::handlers::user::tests::MockUserRepository;

    pub(crate) fn mock_states() -> AppStates {
        let users: Arc<MockUserRepository> = Arc::new(MockUserRepository::new());
        let leaders = Arc::new(MockLeaderRepository::new());
        let ratings = Arc::new(MockRatingRepository::new());
        let comments = Arc::new(MockCommentRepository::new());
        let polls = Arc::new(MockPollRepository::new());
        let notifications = Arc::new(MockNotificationRepository::new());
        let settings = Arc::new(MockSettingsRepository::new());
        let tickets = Arc::new(MockSupportRepository::new());

        AppStates {
            users: UserAppState {
                users: users.clone(),
            },
            leaders: LeaderAppState {
                leaders: leaders.clone(),
                notifications: notifications.clone(),
            },
            ratings: RatingAppState {
                ratings,
                comments,
                leaders: leaders.clone(),
            },
            polls: PollAppState {
                polls,
                users: users.clone(),
                notifications: notifications.clone(),
            },
            notifications: NotificationAppState {
                notifications: notifications.clone(),
            },
            settings: SettingsAppState { settings },
            support: SupportAppState {
                tickets,
                notifications,
            },
        }
    }

    #[test]
    fn api_router_assembles() {
        let _router = api_router(mock_states());
    }
}
