//! User data models and API request/response types.
//!
//! This module defines:
//! - `User`: Database entity representing a registered user
//! - `RegisterRequest` / `RegisterResponse`: `POST /register` bodies
//! - `MeResponse`: `GET /me` body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. Each user:
/// - Has a unique email
/// - Holds exactly one api_key, generated at registration and never rotated
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct User {
    pub email: String,

    /// Opaque bearer credential, also the primary key.
    pub api_key: Uuid,

    pub created_at: DateTime<Utc>,
}

/// A user together with their current webhook URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user: User,
    pub webhook_urls: Vec<String>,
}

/// Request body for registering a new user.
///
/// # JSON Example
///
/// ```json
/// { "email": "a@x.com" }
/// ```
///
/// The field is optional at the serde level so that a missing email is reported
/// as a validation error rather than a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Response body for a successful registration.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "a@x.com",
///   "api_key": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub email: String,
    pub api_key: Uuid,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            api_key: user.api_key,
        }
    }
}

/// Response body for `GET /me`.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "a@x.com",
///   "webhook_urls": ["https://example.com/hook"]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub email: String,
    pub webhook_urls: Vec<String>,
}

/// Drops the api_key: the caller already holds it.
impl From<UserRecord> for MeResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            email: record.user.email,
            webhook_urls: record.webhook_urls,
        }
    }
}
