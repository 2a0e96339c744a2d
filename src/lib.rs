//! Stomp Counter Library
//!
//! Keeps the per-session scoreboard for a two-team stomp tally and the
//! chart maker calculations, and exposes both over an HTTP API.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
