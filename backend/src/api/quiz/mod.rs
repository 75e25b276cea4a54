//! Module for the quiz API.
//!
//! This module defines the public interface for playing a quiz round:
//! drawing the next unseen question, optionally restricted to one
//! category.

pub mod handlers;
pub mod routes;
