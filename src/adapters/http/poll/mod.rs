//! Poll HTTP module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PollAppState;
pub use routes::poll_routes;
