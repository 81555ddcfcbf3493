//! HTTP handlers for rating and comment endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireActor;
use crate::application::handlers::rating::{
    DeleteCommentCommand, DeleteCommentHandler, DeleteRatingCommand, DeleteRatingHandler,
    EditCommentCommand, EditCommentHandler, ListCommentsHandler, ListLeaderRatingsHandler,
    PostCommentCommand, PostCommentHandler, RatingSummaryHandler, RatingSummaryQuery,
    SubmitRatingCommand, SubmitRatingHandler,
};
use crate::domain::foundation::{CommentId, LeaderId, RatingId};
use crate::ports::{CommentRepository, LeaderRepository, RatingRepository};

use super::dto::{
    CommentBodyRequest, CommentResponse, RatingResponse, RatingSummaryResponse,
    SubmitRatingRequest,
};

/// Shared state for rating and comment endpoints.
#[derive(Clone)]
pub struct RatingAppState {
    pub ratings: Arc<dyn RatingRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub leaders: Arc<dyn LeaderRepository>,
}

impl RatingAppState {
    fn submit_handler(&self) -> SubmitRatingHandler {
        SubmitRatingHandler::new(self.ratings.clone(), self.leaders.clone())
    }

    fn delete_handler(&self) -> DeleteRatingHandler {
        DeleteRatingHandler::new(self.ratings.clone())
    }

    fn summary_handler(&self) -> RatingSummaryHandler {
        RatingSummaryHandler::new(self.ratings.clone())
    }

    fn list_ratings_handler(&self) -> ListLeaderRatingsHandler {
        ListLeaderRatingsHandler::new(self.ratings.clone())
    }

    fn post_comment_handler(&self) -> PostCommentHandler {
        PostCommentHandler::new(self.comments.clone(), self.leaders.clone())
    }

    fn edit_comment_handler(&self) -> EditCommentHandler {
        EditCommentHandler::new(self.comments.clone())
    }

    fn delete_comment_handler(&self) -> DeleteCommentHandler {
        DeleteCommentHandler::new(self.comments.clone())
    }

    fn list_comments_handler(&self) -> ListCommentsHandler {
        ListCommentsHandler::new(self.comments.clone())
    }
}

/// POST /api/ratings - submit or replace the caller's rating
pub async fn submit_rating(
    State(state): State<RatingAppState>,
    RequireActor(actor): RequireActor,
    Json(request): Json<SubmitRatingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let rating = state
        .submit_handler()
        .handle(
            SubmitRatingCommand {
                leader_id: request.leader_id,
                score: request.score,
                social_behaviour: request.social_behaviour,
                comment: request.comment,
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(RatingResponse::from(rating))))
}

/// DELETE /api/ratings/:id - delete a rating (submitter or admin)
pub async fn delete_rating(
    State(state): State<RatingAppState>,
    RequireActor(actor): RequireActor,
    Path(rating_id): Path<RatingId>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_handler()
        .handle(DeleteRatingCommand { rating_id }, &actor)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/leaders/:id/rating-summary - aggregate rating picture
pub async fn rating_summary(
    State(state): State<RatingAppState>,
    Path(leader_id): Path<LeaderId>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .summary_handler()
        .handle(RatingSummaryQuery { leader_id })
        .await?;
    Ok(Json(RatingSummaryResponse::from(summary)))
}

/// GET /api/leaders/:id/ratings - individual ratings, newest first
pub async fn list_leader_ratings(
    State(state): State<RatingAppState>,
    Path(leader_id): Path<LeaderId>,
) -> Result<impl IntoResponse, ApiError> {
    let ratings = state.list_ratings_handler().handle(leader_id).await?;
    let response: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();
    Ok(Json(response))
}

/// POST /api/leaders/:id/comments - post a comment
pub async fn post_comment(
    State(state): State<RatingAppState>,
    RequireActor(actor): RequireActor,
    Path(leader_id): Path<LeaderId>,
    Json(request): Json<CommentBodyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = state
        .post_comment_handler()
        .handle(
            PostCommentCommand {
                leader_id,
                body: request.body,
            },
            &actor,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// GET /api/leaders/:id/comments - comments, newest first
pub async fn list_comments(
    State(state): State<RatingAppState>,
    Path(leader_id): Path<LeaderId>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = state.list_comments_handler().handle(leader_id).await?;
    let response: Vec<CommentResponse> = comments.into_iter().map(CommentResponse::from).collect();
    Ok(Json(response))
}

/// PUT /api/comments/:id - edit a comment (submitter or admin)
pub async fn edit_comment(
    State(state): State<RatingAppState>,
    RequireActor(actor): RequireActor,
    Path(comment_id): Path<CommentId>,
    Json(request): Json<CommentBodyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = state
        .edit_comment_handler()
        .handle(
            EditCommentCommand {
                comment_id,
                body: request.body,
            },
            &actor,
        )
        .await?;
    Ok(Json(CommentResponse::from(comment)))
}

/// DELETE /api/comments/:id - delete a comment (submitter or admin)
pub async fn delete_comment(
    State(state): State<RatingAppState>,
    RequireActor(actor): RequireActor,
    Path(comment_id): Path<CommentId>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_comment_handler()
        .handle(DeleteCommentCommand { comment_id }, &actor)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
