//! HTTP adapter for rating and comment endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RatingAppState;
pub use routes::{leader_rating_routes, rating_routes};
