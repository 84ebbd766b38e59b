use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use rekap_core::{AppError, DataResponse};
use rekap_models::{DailySummary, DailySummaryParams, RangeSummaryParams};
use tracing::instrument;

use super::service::{RangeSummaryResponse, SummaryService, resolve_daily_date, resolve_range};
use crate::docs::{DailySummaryResponse, ErrorResponse};
use crate::state::AppState;

fn invalid_query(e: QueryRejection) -> AppError {
    AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e))
}

/// Totals for a single day
#[utoipa::path(
    get,
    path = "/api/summary/daily",
    params(DailySummaryParams),
    responses(
        (status = 200, description = "Daily totals", body = DailySummaryResponse),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Summary",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_daily_summary(
    State(state): State<AppState>,
    params: Result<Query<DailySummaryParams>, QueryRejection>,
) -> Result<Json<DataResponse<DailySummary>>, AppError> {
    let Query(params) = params.map_err(invalid_query)?;
    let date = resolve_daily_date(&params)?;

    let summary = SummaryService::daily(&state.db, date, params.branch_id).await?;
    Ok(Json(DataResponse::new(summary)))
}

/// Per-day breakdown over an inclusive date range
#[utoipa::path(
    get,
    path = "/api/summary/range",
    params(RangeSummaryParams),
    responses(
        (status = 200, description = "Per-day totals", body = RangeSummaryResponse),
        (status = 400, description = "Missing or invalid dates", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Summary",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_range_summary(
    State(state): State<AppState>,
    params: Result<Query<RangeSummaryParams>, QueryRejection>,
) -> Result<Json<RangeSummaryResponse>, AppError> {
    let Query(params) = params.map_err(invalid_query)?;
    let (start, end) = resolve_range(&params)?;

    let rows = SummaryService::range(&state.db, start, end, params.branch_id).await?;
    Ok(Json(RangeSummaryResponse {
        data: rows,
        start_date: start.format(crate::utils::dates::DATE_FORMAT).to_string(),
        end_date: end.format(crate::utils::dates::DATE_FORMAT).to_string(),
    }))
}
