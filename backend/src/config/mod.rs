//! Central module for application-wide configuration settings.
//!
//! This module handles loading configuration parameters such as the
//! database URL and the server bind address from the environment,
//! with a `.env` file honored when present.

use std::env;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment, falling back to
    /// development defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://trivia.db".to_string()),
            host: env::var("TRIVIA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("TRIVIA_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(3000),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
