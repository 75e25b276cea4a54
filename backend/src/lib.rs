//! Trivia backend library.
//!
//! Exposes the router, store layer, and configuration so that the
//! binary and the integration tests build the application the same
//! way.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod utils;
