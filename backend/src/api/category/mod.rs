//! Module for the category API.
//!
//! This module defines the public interface for listing categories and
//! browsing the questions filed under a single category.

pub mod handlers;
pub mod routes;
