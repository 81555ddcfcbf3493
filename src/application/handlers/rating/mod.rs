//! Rating and comment handlers.

mod comments;
mod delete_rating;
mod rating_summary;
mod submit_rating;

pub use comments::{
    DeleteCommentCommand, DeleteCommentHandler, EditCommentCommand, EditCommentHandler,
    ListCommentsHandler, PostCommentCommand, PostCommentHandler,
};
pub use delete_rating::{DeleteRatingCommand, DeleteRatingHandler};
pub use rating_summary::{ListLeaderRatingsHandler, RatingSummaryHandler, RatingSummaryQuery};
pub use submit_rating::{SubmitRatingCommand, SubmitRatingHandler};
