//! Axum routers for rating and comment endpoints.
//!
//! Rating reads hang off the leader they describe, so the endpoints are
//! split across two routers: one for `/ratings` and `/comments`, and a
//! leader-scoped one merged into the `/leaders` subtree.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    delete_comment, delete_rating, edit_comment, list_comments, list_leader_ratings, post_comment,
    rating_summary, submit_rating, RatingAppState,
};

/// Create the rating API router, for mounting at `/api`.
///
/// - `POST /ratings` - submit or replace the caller's rating
/// - `DELETE /ratings/:id` - delete a rating (submitter or admin)
/// - `PUT /comments/:id` - edit a comment (submitter or admin)
/// - `DELETE /comments/:id` - delete a comment (submitter or admin)
pub fn rating_routes() -> Router<RatingAppState> {
    Router::new()
        .route("/ratings", post(submit_rating))
        .route("/ratings/:id", delete(delete_rating))
        .route("/comments/:id", put(edit_comment).delete(delete_comment))
}

/// Create the leader-scoped rating reads, for merging under `/api/leaders`.
///
/// - `GET /:id/rating-summary` - aggregate rating picture
/// - `GET /:id/ratings` - individual ratings
/// - `GET /:id/comments` - list comments
/// - `POST /:id/comments` - post a comment
pub fn leader_rating_routes() -> Router<RatingAppState> {
    Router::new()
        .route("/:id/rating-summary", get(rating_summary))
        .route("/:id/ratings", get(list_leader_ratings))
        .route("/:id/comments", get(list_comments).post(post_comment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::leader::tests::MockLeaderRepository;
    use crate::application::handlers::rating::tests::{
        MockCommentRepository, MockRatingRepository,
    };

    fn state() -> RatingAppState {
        RatingAppState {
            ratings: Arc::new(MockRatingRepository::new()),
            comments: Arc::new(MockCommentRepository::new()),
            leaders: Arc::new(MockLeaderRepository::new()),
        }
    }

    #[test]
    fn rating_routes_build() {
        let _: Router<()> = rating_routes().with_state(state());
    }

    #[test]
    fn leader_rating_routes_build() {
        let _: Router<()> = leader_rating_routes().with_state(state());
    }
}
