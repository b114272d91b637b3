use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{API_KEY_TAKEN, EMAIL_TAKEN, RegistryStore, URL_ALREADY_SUBSCRIBED};
use crate::{
    error::AppError,
    models::{subscription::WebhookSubscription, user::User},
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// Insertion order, mirrors `ORDER BY created_at, id`.
    subscriptions: Vec<WebhookSubscription>,
    next_subscription_id: i64,
}

/// In-process store with the same constraints as the PostgreSQL schema.
///
/// Every operation takes the single table lock, so each call is atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user and, like `ON DELETE CASCADE`, every subscription they hold.
    #[cfg(test)]
    pub async fn remove_user(&self, api_key: Uuid) -> bool {
        let mut tables = self.tables.write().await;
        let removed = tables.users.remove(&api_key).is_some();
        tables.subscriptions.retain(|s| s.api_key != api_key);
        removed
    }

    #[cfg(test)]
    pub async fn subscription_count(&self) -> usize {
        self.tables.read().await.subscriptions.len()
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_user(&self, email: &str, api_key: Uuid) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == email) {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }
        if tables.users.contains_key(&api_key) {
            return Err(AppError::Conflict(API_KEY_TAKEN.to_string()));
        }

        let user = User {
            email: email.to_string(),
            api_key,
            created_at: Utc::now(),
        };
        tables.users.insert(api_key, user.clone());
        Ok(user)
    }

    async fn find_user(&self, api_key: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.tables.read().await.users.get(&api_key).cloned())
    }

    async fn insert_subscription(
        &self,
        api_key: Uuid,
        webhook_url: &str,
    ) -> Result<WebhookSubscription, AppError> {
        let mut tables = self.tables.write().await;

        // Foreign key
        if !tables.users.contains_key(&api_key) {
            return Err(AppError::UserNotFound);
        }
        if tables
            .subscriptions
            .iter()
            .any(|s| s.api_key == api_key && s.webhook_url == webhook_url)
        {
            return Err(AppError::Conflict(URL_ALREADY_SUBSCRIBED.to_string()));
        }

        tables.next_subscription_id += 1;
        let subscription = WebhookSubscription {
            id: tables.next_subscription_id,
            api_key,
            webhook_url: webhook_url.to_string(),
            created_at: Utc::now(),
        };
        tables.subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    async fn delete_subscription(
        &self,
        api_key: Uuid,
        webhook_url: &str,
    ) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.subscriptions.len();
        tables
            .subscriptions
            .retain(|s| !(s.api_key == api_key && s.webhook_url == webhook_url));
        Ok((before - tables.subscriptions.len()) as u64)
    }

    async fn list_subscriptions(
        &self,
        api_key: Uuid,
    ) -> Result<Vec<WebhookSubscription>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .subscriptions
            .iter()
            .filter(|s| s.api_key == api_key)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryStore::new();
        store.insert_user("a@x.com", Uuid::new_v4()).await.unwrap();

        let err = store
            .insert_user("a@x.com", Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref m) if m == EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn subscription_requires_existing_user() {
        let store = MemoryStore::new();

        let err = store
            .insert_subscription(Uuid::new_v4(), "https://example.com/hook")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UserNotFound));
        assert_eq!(store.subscription_count().await, 0);
    }

    #[tokio::test]
    async fn removing_user_cascades_to_subscriptions() {
        let store = MemoryStore::new();
        let keep = Uuid::new_v4();
        let gone = Uuid::new_v4();
        store.insert_user("keep@x.com", keep).await.unwrap();
        store.insert_user("gone@x.com", gone).await.unwrap();
        store
            .insert_subscription(keep, "https://keep.example.com")
            .await
            .unwrap();
        store
            .insert_subscription(gone, "https://gone.example.com/a")
            .await
            .unwrap();
        store
            .insert_subscription(gone, "https://gone.example.com/b")
            .await
            .unwrap();

        assert!(store.remove_user(gone).await);
        assert_eq!(store.subscription_count().await, 1);
        assert!(store.find_user(gone).await.unwrap().is_none());
        assert_eq!(store.list_subscriptions(keep).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_matches_exact_url_only() {
        let store = MemoryStore::new();
        let key = Uuid::new_v4();
        store.insert_user("a@x.com", key).await.unwrap();
        store
            .insert_subscription(key, "https://example.com/hook")
            .await
            .unwrap();

        assert_eq!(
            store
                .delete_subscription(key, "https://example.com/hook/")
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            store
                .delete_subscription(key, "https://example.com/hook")
                .await
                .unwrap(),
            1
        );
    }
}
