//! OpenAPI documentation

use utoipa::OpenApi;

use crate::{error, handlers};

/// OpenAPI document for the ChronoSort API
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "ChronoSort API",
        description = "Sorts batches of heterogeneously formatted date strings chronologically"
    ),
    paths(
        handlers::health::service_info,
        handlers::health::health_check,
        handlers::dates::sort_dates,
        handlers::dates::list_formats,
    ),
    components(schemas(
        handlers::health::ServiceInfo,
        handlers::health::HealthResponse,
        handlers::dates::SortDatesRequest,
        handlers::dates::SortDatesResponse,
        handlers::dates::SupportedFormat,
        handlers::dates::SupportedFormatsResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness and service info"),
        (name = "dates", description = "Date sorting operations"),
    )
)]
pub struct ApiDoc;
