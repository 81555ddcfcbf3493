//! Support HTTP module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SupportAppState;
pub use routes::support_routes;
