//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. The PostgreSQL adapters implement
//! every repository port here; tests substitute in-memory mocks.

mod comment_repository;
mod leader_repository;
mod notification_repository;
mod poll_repository;
mod rating_repository;
mod settings_repository;
mod support_repository;
mod user_repository;

pub use comment_repository::CommentRepository;
pub use leader_repository::{LeaderFilter, LeaderRepository};
pub use notification_repository::NotificationRepository;
pub use poll_repository::PollRepository;
pub use rating_repository::RatingRepository;
pub use settings_repository::SettingsRepository;
pub use support_repository::SupportRepository;
pub use user_repository::UserRepository;
