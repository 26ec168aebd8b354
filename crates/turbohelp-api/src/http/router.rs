//! Axum router configuration with middleware.
//!
//! API routes live under `/api/`. Everything else falls through to the static
//! front-end directory (`GET /` serves its `index.html`). If the directory
//! does not exist, only the API is served.
//! Middleware: body size limit, panic catching, CORS, tracing.

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::error::panic_response;
use crate::http::handlers;
use crate::state::AppState;

/// Largest request body accepted, in bytes. Bigger bodies get a 413.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(handlers::health::health));

    let mut router = Router::new().nest("/api", api_routes);

    if static_dir.is_dir() {
        router = router.fallback_service(ServeDir::new(static_dir));
        tracing::info!(path = %static_dir.display(), "static file serving enabled");
    } else {
        tracing::warn!(
            path = %static_dir.display(),
            "static directory not found, serving API only"
        );
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
