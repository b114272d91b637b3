//! HTTP handlers for webhook subscriptions.
//!
//! All routes here sit behind the bearer auth middleware.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    extract::AppJson,
    middleware::auth::AuthContext,
    models::subscription::{SubscriptionRequest, SubscriptionResponse},
    services::subscription_service,
    store::SharedStore,
};

/// Subscribe a webhook URL.
///
/// # Request Body
///
/// ```json
/// { "webhook_url": "https://example.com/hook" }
/// ```
///
/// # Response
///
/// Returns 201 Created:
///
/// ```json
/// {
///   "webhook_url": "https://example.com/hook",
///   "created_at": "2025-01-15T10:30:00Z"
/// }
/// ```
///
/// 400 for a malformed or already subscribed URL, 404 for an unknown api_key.
pub async fn subscribe(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
    AppJson(request): AppJson<SubscriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = subscription_service::subscribe(
        store.as_ref(),
        auth.api_key,
        request.webhook_url.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubscriptionResponse::from(subscription)),
    ))
}

/// Remove a webhook URL.
///
/// # Response
///
/// Returns 204 No Content on success, 404 if the user or the exact URL is unknown.
pub async fn unsubscribe(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
    AppJson(request): AppJson<SubscriptionRequest>,
) -> Result<StatusCode, AppError> {
    subscription_service::unsubscribe(
        store.as_ref(),
        auth.api_key,
        request.webhook_url.as_deref(),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the authenticated user's subscriptions, oldest first.
pub async fn list_subscriptions(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<SubscriptionResponse>>, AppError> {
    let subscriptions = subscription_service::list_records(store.as_ref(), auth.api_key).await?;

    Ok(Json(subscriptions.into_iter().map(Into::into).collect()))
}
