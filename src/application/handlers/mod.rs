//! Handlers, grouped by domain module.

pub mod leader;
pub mod notification;
pub mod poll;
pub mod rating;
pub mod settings;
pub mod support;
pub mod user;
