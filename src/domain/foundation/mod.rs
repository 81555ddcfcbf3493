//! Foundation types shared across all domain modules.
//!
//! Value objects (ids, timestamps, scores, percentages), the caller
//! identity used for authorization, and the domain error types.

mod actor;
mod errors;
mod ids;
mod percentage;
mod score;
mod timestamp;

pub use actor::{Actor, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AdminMessageId, CommentId, LeaderId, NotificationId, PollId, PollOptionId, PollQuestionId,
    PollResponseId, RatingId, TicketId, UserId,
};
pub use percentage::Percentage;
pub use score::Score;
pub use timestamp::Timestamp;
