//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                      - Redirect to the API documentation (public)
//! - `GET  /health`                - Health check: database (public)
//! - `GET  /swagger-ui`            - Swagger UI (public)
//! - `GET  /api-docs/openapi.json` - OpenAPI document (public)
//! - `/api/*`                      - REST API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Authentication** - Bearer token, then per-handler role guards
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
///
/// Swagger UI is routed ahead of path normalization because it redirects
/// `/swagger-ui` to `/swagger-ui/` itself.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - token bucket for `/api`; `None` disables rate limiting
pub fn app_router(state: AppState, rate_limit: Option<RateLimitSettings>) -> Router {
    let mut api_router = api::routes::api_router(&state);
    if let Some(layer) = rate_limit.and_then(rate_limit::layer) {
        api_router = api_router.layer(layer);
    }

    let router = Router::new()
        .route("/", get(|| async { Redirect::temporary("/swagger-ui/") }))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state);

    let normalized = NormalizePathLayer::trim_trailing_slash().layer(router);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(normalized)
        .layer(tracing::layer())
}
