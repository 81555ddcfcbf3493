//! Application layer - command and query handlers over the domain.

pub mod handlers;
