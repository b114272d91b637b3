//! hookreg - API-key authenticated webhook registry.
//!
//! Users register an email and receive an API key. With that key they can attach any
//! number of webhook delivery URLs, list them, and remove them again. A public sample
//! endpoint exposes the shape of the records a webhook would carry.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, or an in-process store for `memory://`
//! - **Authentication**: `Authorization: Bearer <api_key>`
//! - **Format**: JSON requests/responses

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod store;

pub use server::create_router;
