//! PostgreSQL adapters - implementations of the repository ports.

mod comment_repository;
mod leader_repository;
mod notification_repository;
mod poll_repository;
mod rating_repository;
mod settings_repository;
mod support_repository;
mod user_repository;

pub use comment_repository::PostgresCommentRepository;
pub use leader_repository::PostgresLeaderRepository;
pub use notification_repository::PostgresNotificationRepository;
pub use poll_repository::PostgresPollRepository;
pub use rating_repository::PostgresRatingRepository;
pub use settings_repository::PostgresSettingsRepository;
pub use support_repository::PostgresSupportRepository;
pub use user_repository::PostgresUserRepository;
