use axum::{Json, extract::State};
use rekap_core::{AppError, DataResponse};
use rekap_models::BranchStats;
use tracing::instrument;

use super::service::BranchService;
use crate::docs::{BranchListResponse, ErrorResponse};
use crate::state::AppState;

/// List branches with their transaction statistics
#[utoipa::path(
    get,
    path = "/api/branches",
    responses(
        (status = 200, description = "Branch statistics", body = BranchListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Branches",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_branches(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<BranchStats>>>, AppError> {
    let branches = BranchService::list_stats(&state.db).await?;
    Ok(Json(DataResponse::new(branches)))
}
