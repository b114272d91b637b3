//! User HTTP handlers.
//!
//! - POST /register - Register an email and receive an api_key
//! - GET /me - Show the authenticated user and their webhook URLs

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
    models::user::{MeResponse, RegisterRequest, RegisterResponse},
    services::user_service,
    store::SharedStore,
};

/// Register a new user.
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com" }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"email": "a@x.com", "api_key": "<uuid>"}`
/// - **Error (400)**: email missing, malformed, or already registered
pub async fn register(
    State(store): State<SharedStore>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = user_service::register(store.as_ref(), request.email.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(user))))
}

/// Show the authenticated user.
///
/// # Authentication
///
/// `Authorization: Bearer <api_key>`
///
/// # Response
///
/// - **Success (200 OK)**: `{"email": "a@x.com", "webhook_urls": [...]}`
/// - **Error (400)**: malformed Authorization header
/// - **Error (404)**: unknown api_key
pub async fn me(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<MeResponse>, AppError> {
    let record = user_service::lookup(store.as_ref(), auth.api_key).await?;

    Ok(Json(record.into()))
}
