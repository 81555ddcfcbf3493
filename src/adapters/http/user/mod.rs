//! HTTP adapter for user endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::UserAppState;
pub use routes::user_routes;
