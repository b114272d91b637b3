//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//! The resulting `Config` is passed explicitly to the store and server; nothing reads the environment after startup.

use serde::Deserialize;

/// Connection-string prefix that selects the in-process store.
pub const MEMORY_URL_PREFIX: &str = "memory://";

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string, or `memory://` for the in-process store
/// - `PORT` (optional): HTTP server port, defaults to 8080
/// - `RUN_MIGRATIONS` (optional): apply schema migrations at startup, defaults to true
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    8080
}

fn default_run_migrations() -> bool {
    true
}

/// Which store backend a connection string selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }

    /// Build a configuration for the in-process store (local runs and tests).
    pub fn in_memory() -> Self {
        Self {
            database_url: MEMORY_URL_PREFIX.to_string(),
            port: default_port(),
            run_migrations: false,
        }
    }

    pub fn store_kind(&self) -> StoreKind {
        if self.database_url.starts_with(MEMORY_URL_PREFIX) {
            StoreKind::Memory
        } else {
            StoreKind::Postgres
        }
    }
}
