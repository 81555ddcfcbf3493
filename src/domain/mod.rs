//! Domain layer - entities, value objects, and domain rules.

pub mod foundation;
pub mod leader;
pub mod notification;
pub mod poll;
pub mod rating;
pub mod settings;
pub mod support;
pub mod user;
