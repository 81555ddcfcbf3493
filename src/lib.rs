//! Civiscore - civic leader rating platform backend.
//!
//! This crate implements the data-access and REST layer for a "rate your
//! leader" application: leader profiles, per-user ratings and comments,
//! polls, notifications, support tickets, and site settings backed by
//! PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
