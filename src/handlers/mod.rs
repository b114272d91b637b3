//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, auth context)
//! 2. Calls the matching service
//! 3. Returns HTTP response (JSON, status code)

/// Liveness and health endpoints
pub mod health;
/// Sample data endpoint
pub mod sample;
/// Subscription management endpoints
pub mod subscriptions;
/// Registration and profile endpoints
pub mod users;
