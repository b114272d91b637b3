use async_trait::async_trait;
use uuid::Uuid;

use super::{API_KEY_TAKEN, EMAIL_TAKEN, RegistryStore, URL_ALREADY_SUBSCRIBED};
use crate::{
    db::DbPool,
    error::AppError,
    models::{subscription::WebhookSubscription, user::User},
};

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Translate constraint violations into domain errors.
///
/// Anything else stays a `Database` error and surfaces as a 500.
fn map_write_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = match db_err.constraint() {
                Some("users_email_key") => EMAIL_TAKEN,
                Some("users_pkey") => API_KEY_TAKEN,
                Some("webhook_subscriptions_api_key_url_key") => URL_ALREADY_SUBSCRIBED,
                _ => "Duplicate value",
            };
            return AppError::Conflict(message.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return AppError::UserNotFound;
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl RegistryStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_user(&self, email: &str, api_key: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, api_key)
            VALUES ($1, $2)
            RETURNING email, api_key, created_at
            "#,
        )
        .bind(email)
        .bind(api_key)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn find_user(&self, api_key: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT email, api_key, created_at FROM users WHERE api_key = $1",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_subscription(
        &self,
        api_key: Uuid,
        webhook_url: &str,
    ) -> Result<WebhookSubscription, AppError> {
        sqlx::query_as::<_, WebhookSubscription>(
            r#"
            INSERT INTO webhook_subscriptions (api_key, webhook_url)
            VALUES ($1, $2)
            RETURNING id, api_key, webhook_url, created_at
            "#,
        )
        .bind(api_key)
        .bind(webhook_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete_subscription(
        &self,
        api_key: Uuid,
        webhook_url: &str,
    ) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM webhook_subscriptions WHERE api_key = $1 AND webhook_url = $2")
                .bind(api_key)
                .bind(webhook_url)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn list_subscriptions(
        &self,
        api_key: Uuid,
    ) -> Result<Vec<WebhookSubscription>, AppError> {
        let subscriptions = sqlx::query_as::<_, WebhookSubscription>(
            r#"
            SELECT id, api_key, webhook_url, created_at
            FROM webhook_subscriptions
            WHERE api_key = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(api_key)
        .fetch_all(&self.pool)
        .await?;

        Ok(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_stay_database_errors() {
        assert!(matches!(
            map_write_error(sqlx::Error::PoolTimedOut),
            AppError::Database(_)
        ));
    }
}
