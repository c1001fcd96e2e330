//! Date sorting handlers

use application::{DateSortService, candidate_formats};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Sort request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SortDatesRequest {
    /// Date strings in any supported input format
    #[schema(example = json!(["2025-12-31", "01/15/2025", "June 20, 2025"]))]
    pub dates: Vec<String>,
    /// strftime-style output pattern; defaults to `%Y-%m-%d`
    #[serde(default)]
    #[schema(example = "%Y-%m-%d")]
    pub output_format: Option<String>,
}

/// Sort response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SortDatesResponse {
    /// Rendered dates in chronological order
    pub sorted_dates: Vec<String>,
    /// Number of dates returned (always equals the number submitted)
    pub count: usize,
}

/// Sort a batch of dates chronologically
///
/// All-or-nothing: an empty list, an unparseable entry, or an unusable
/// output format fails the whole request with a 400.
#[utoipa::path(
    post,
    path = "/v1/dates/sort",
    tag = "dates",
    request_body = SortDatesRequest,
    responses(
        (status = 200, description = "Dates sorted chronologically", body = SortDatesResponse),
        (status = 400, description = "Empty list, unparseable date, or invalid output format",
            body = crate::error::ErrorResponse),
    )
)]
#[instrument(skip(state, request), fields(batch_len = request.dates.len()))]
pub async fn sort_dates(
    State(state): State<AppState>,
    Json(request): Json<SortDatesRequest>,
) -> Result<Json<SortDatesResponse>, ApiError> {
    let output_format = request
        .output_format
        .as_deref()
        .unwrap_or(DateSortService::DEFAULT_OUTPUT_FORMAT);

    let sorted = state.sort_service.sort_dates(&request.dates, output_format)?;

    Ok(Json(SortDatesResponse {
        sorted_dates: sorted.sorted_dates,
        count: sorted.count,
    }))
}

/// One supported input format
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupportedFormat {
    /// strftime pattern tried against input
    pub pattern: String,
    /// Example date string this pattern accepts
    pub example: String,
}

/// Supported-formats response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupportedFormatsResponse {
    /// Input patterns in the order they are tried
    pub formats: Vec<SupportedFormat>,
    /// Default output pattern
    pub default_output_format: String,
}

/// List the supported input formats
///
/// Patterns are listed in the order they are tried against input; earlier
/// patterns win for ambiguous strings.
#[utoipa::path(
    get,
    path = "/v1/dates/formats",
    tag = "dates",
    responses((status = 200, description = "Supported input formats", body = SupportedFormatsResponse))
)]
pub async fn list_formats() -> Json<SupportedFormatsResponse> {
    let formats = candidate_formats()
        .iter()
        .map(|candidate| SupportedFormat {
            pattern: candidate.pattern.as_str().to_string(),
            example: candidate.example.to_string(),
        })
        .collect();

    Json(SupportedFormatsResponse {
        formats,
        default_output_format: DateSortService::DEFAULT_OUTPUT_FORMAT.to_string(),
    })
}
