//! Module for the question API.
//!
//! This module defines the public interface for listing, creating,
//! deleting, and searching trivia questions.

pub mod handlers;
pub mod routes;
