//! Webhook subscription models.
//!
//! A subscription associates one delivery URL with one api_key. A user may hold
//! any number of subscriptions, but never the same exact URL twice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Webhook subscription registered by a user.
///
/// # Database Table
///
/// Maps to the `webhook_subscriptions` table. Rows are removed when the owning
/// user is deleted (`ON DELETE CASCADE`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct WebhookSubscription {
    pub id: i64,
    pub api_key: Uuid,
    /// Stored exactly as submitted; never normalized.
    pub webhook_url: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /subscribe` and `DELETE /unsubscribe`.
///
/// # Example
///
/// ```json
/// { "webhook_url": "https://example.com/hook" }
/// ```
///
/// # Validation
///
/// - URL must parse and use `http` or `https`
/// - URL must not exceed 2048 characters
#[derive(Debug, Default, Deserialize)]
pub struct SubscriptionRequest {
    #[serde(default)]
    pub webhook_url: Option<String>,
}

/// Response when subscribing or listing subscriptions.
///
/// # Example
///
/// ```json
/// {
///   "webhook_url": "https://example.com/hook",
///   "created_at": "2025-01-15T10:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionResponse {
    pub webhook_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<WebhookSubscription> for SubscriptionResponse {
    fn from(subscription: WebhookSubscription) -> Self {
        Self {
            webhook_url: subscription.webhook_url,
            created_at: subscription.created_at,
        }
    }
}
