//! HTTP adapter for leader endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::LeaderAppState;
pub use routes::leader_routes;
