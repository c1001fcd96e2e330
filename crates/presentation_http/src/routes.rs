//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi as _;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, openapi::ApiDoc, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service banner and health
        .route("/", get(handlers::health::service_info))
        .route("/health", get(handlers::health::health_check))
        // Date sorting API (v1)
        .route("/v1/dates/sort", post(handlers::dates::sort_dates))
        .route("/v1/dates/formats", get(handlers::dates::list_formats))
        // API documentation
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Attach state
        .with_state(state)
}
