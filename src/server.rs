//! HTTP router construction and server lifecycle.
//!
//! # Routes
//!
//! Public:
//! - `GET /` liveness
//! - `GET /health` store connectivity
//! - `POST /register`
//! - `GET /sample`
//!
//! Bearer-authenticated:
//! - `GET /me`
//! - `GET /subscriptions`
//! - `POST /subscribe`
//! - `DELETE /unsubscribe`

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{handlers, middleware, store::SharedStore};

/// Build the application router around a store.
pub fn create_router(store: SharedStore) -> Router {
    let authenticated_routes = Router::new()
        .route("/me", get(handlers::users::me))
        .route(
            "/subscriptions",
            get(handlers::subscriptions::list_subscriptions),
        )
        .route("/subscribe", post(handlers::subscriptions::subscribe))
        .route("/unsubscribe", delete(handlers::subscriptions::unsubscribe))
        // Only runs for matched routes, so unknown paths still 404
        .route_layer(axum_middleware::from_fn(
            middleware::auth::auth_middleware,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::liveness))
        .route("/health", get(handlers::health::health_check))
        .route("/register", post(handlers::users::register))
        .route("/sample", get(handlers::sample::sample))
        .merge(authenticated_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store)
}

/// Bind `0.0.0.0:port` and serve until Ctrl+C or SIGTERM.
pub async fn serve(store: SharedStore, port: u16) -> Result<(), std::io::Error> {
    let app = create_router(store);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Waits for CTRL+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received CTRL+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
