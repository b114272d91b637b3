//! Data models representing database entities and API payloads.

/// Registered user model
pub mod user;
/// Webhook subscription model
pub mod subscription;
/// Sample enrichment record model
pub mod sample;
