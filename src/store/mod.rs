//! Persistence for users and webhook subscriptions.
//!
//! `RegistryStore` is the only seam between the services and storage. Two backends exist:
//! - `PgStore`: PostgreSQL through sqlx, parameterized statements only
//! - `MemoryStore`: in-process tables, selected by a `memory://` connection string
//!
//! Both enforce the same constraints: unique email, unique `(api_key, webhook_url)`,
//! and subscriptions only for registered api_keys.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::{Config, StoreKind},
    db,
    error::AppError,
    models::{subscription::WebhookSubscription, user::User},
};

pub(crate) const EMAIL_TAKEN: &str = "Email already registered";
pub(crate) const API_KEY_TAKEN: &str = "API key already issued";
pub(crate) const URL_ALREADY_SUBSCRIBED: &str = "Webhook URL already subscribed";

/// Storage operations backing the user directory and subscription set.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Insert a user. Fails with `Conflict` if the email or api_key already exists.
    async fn insert_user(&self, email: &str, api_key: Uuid) -> Result<User, AppError>;

    async fn find_user(&self, api_key: Uuid) -> Result<Option<User>, AppError>;

    /// Insert a subscription row.
    ///
    /// Fails with `UserNotFound` if no user holds `api_key` and with `Conflict`
    /// if the same exact URL is already subscribed under it.
    async fn insert_subscription(
        &self,
        api_key: Uuid,
        webhook_url: &str,
    ) -> Result<WebhookSubscription, AppError>;

    /// Delete the row matching both `api_key` and `webhook_url` exactly.
    /// Returns the number of rows removed (0 or 1).
    async fn delete_subscription(&self, api_key: Uuid, webhook_url: &str)
    -> Result<u64, AppError>;

    /// All subscriptions of `api_key`, oldest first.
    async fn list_subscriptions(&self, api_key: Uuid)
    -> Result<Vec<WebhookSubscription>, AppError>;
}

/// Store handle shared by every request handler.
pub type SharedStore = Arc<dyn RegistryStore>;

/// Open the store selected by `config.database_url`.
///
/// For PostgreSQL this creates the pool and, unless disabled, applies pending migrations
/// before returning.
pub async fn connect(config: &Config) -> anyhow::Result<SharedStore> {
    match config.store_kind() {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreKind::Postgres => {
            let pool = db::create_pool(&config.database_url)
                .await
                .context("failed to connect to database")?;
            tracing::info!("Database pool created");

            if config.run_migrations {
                db::run_migrations(&pool)
                    .await
                    .context("failed to run database migrations")?;
                tracing::info!("Database migrations complete");
            }

            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}
