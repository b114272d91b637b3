//! Webhook subscription set: subscribe, unsubscribe and listing.
//!
//! URLs are compared by exact string equality everywhere. No normalization is applied,
//! so `https://example.com/hook` and `https://example.com/hook/` are distinct subscriptions.

use uuid::Uuid;

use crate::{
    error::AppError,
    models::subscription::WebhookSubscription,
    services::user_service,
    store::RegistryStore,
};

const MAX_URL_LEN: usize = 2048;

/// Subscribe `webhook_url` under `api_key`.
///
/// # Process
///
/// 1. Validate URL format
/// 2. Verify the api_key belongs to a registered user
/// 3. Insert the subscription row
///
/// # Errors
///
/// - `Validation`: URL missing or malformed
/// - `UserNotFound`: api_key is not registered (no row is created)
/// - `Conflict`: the same URL is already subscribed under this api_key
pub async fn subscribe(
    store: &dyn RegistryStore,
    api_key: Uuid,
    webhook_url: Option<&str>,
) -> Result<WebhookSubscription, AppError> {
    let webhook_url = validate_webhook_url(webhook_url)?;
    user_service::find(store, api_key).await?;

    let subscription = store.insert_subscription(api_key, webhook_url).await?;
    tracing::info!(%api_key, url = %subscription.webhook_url, "Webhook subscribed");

    Ok(subscription)
}

/// Remove the subscription matching `api_key` and `webhook_url` exactly.
///
/// # Errors
///
/// - `Validation`: URL missing
/// - `UserNotFound`: api_key is not registered
/// - `SubscriptionNotFound`: the user holds no subscription for this exact URL;
///   nothing is deleted
pub async fn unsubscribe(
    store: &dyn RegistryStore,
    api_key: Uuid,
    webhook_url: Option<&str>,
) -> Result<(), AppError> {
    // Only presence is checked: a stored URL must stay removable even if it would
    // no longer pass validation.
    let webhook_url = webhook_url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::validation("webhook_url is required"))?;
    user_service::find(store, api_key).await?;

    let removed = store.delete_subscription(api_key, webhook_url).await?;
    if removed == 0 {
        tracing::debug!(%api_key, url = %webhook_url, "No subscription to remove");
        return Err(AppError::SubscriptionNotFound);
    }

    tracing::info!(%api_key, url = %webhook_url, "Webhook unsubscribed");
    Ok(())
}

/// All URLs subscribed under `api_key`, oldest first.
pub async fn list_for(store: &dyn RegistryStore, api_key: Uuid) -> Result<Vec<String>, AppError> {
    Ok(list_records(store, api_key)
        .await?
        .into_iter()
        .map(|s| s.webhook_url)
        .collect())
}

/// All subscription rows of `api_key`, oldest first.
///
/// # Errors
///
/// - `UserNotFound`: api_key is not registered
pub async fn list_records(
    store: &dyn RegistryStore,
    api_key: Uuid,
) -> Result<Vec<WebhookSubscription>, AppError> {
    user_service::find(store, api_key).await?;
    store.list_subscriptions(api_key).await
}

/// Validate webhook URL format.
///
/// # Rules
///
/// - Required and non-empty
/// - Maximum 2048 characters
/// - Must parse as an absolute URL with a host
/// - Scheme must be HTTP or HTTPS
///
/// The input string is returned untouched.
fn validate_webhook_url(url: Option<&str>) -> Result<&str, AppError> {
    let url = url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::validation("webhook_url is required"))?;

    if url.len() > MAX_URL_LEN {
        return Err(AppError::validation("URL exceeds 2048 characters"));
    }

    let parsed =
        url::Url::parse(url).map_err(|_| AppError::validation("Invalid URL format"))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(url),
        "http" | "https" => Err(AppError::validation("URL must include a host")),
        _ => Err(AppError::validation("URL must use HTTP or HTTPS")),
    }
}
