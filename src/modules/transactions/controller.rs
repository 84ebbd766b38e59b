use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use rekap_core::{AppError, DataResponse, Paginated};
use rekap_models::{Transaction, TransactionFilterParams};
use tracing::instrument;

use super::service::TransactionService;
use crate::docs::{
    ErrorResponse, PaginatedTransactions, TransactionListResponse, TransactionResponse,
};
use crate::state::AppState;

/// List transactions, newest first
#[utoipa::path(
    get,
    path = "/api/transactions",
    params(TransactionFilterParams),
    responses(
        (status = 200, description = "Page of transactions", body = PaginatedTransactions),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Transactions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_transactions(
    State(state): State<AppState>,
    params: Result<Query<TransactionFilterParams>, QueryRejection>,
) -> Result<Json<Paginated<Transaction>>, AppError> {
    let Query(params) = params
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;

    let page = TransactionService::list(&state.db, params).await?;
    Ok(Json(page))
}

/// Get a transaction by its receipt number
#[utoipa::path(
    get,
    path = "/api/transactions/trx/{trx_no}",
    params(
        ("trx_no" = String, Path, description = "Receipt number")
    ),
    responses(
        (status = 200, description = "Transaction", body = TransactionResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    ),
    tag = "Transactions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(trx_no = %trx_no))]
pub async fn get_transaction_by_trx_no(
    State(state): State<AppState>,
    Path(trx_no): Path<String>,
) -> Result<Json<DataResponse<Transaction>>, AppError> {
    let transaction = TransactionService::find_by_transaction_no(&state.db, &trx_no).await?;
    Ok(Json(DataResponse::new(transaction)))
}

/// List every transaction of a branch, newest first
#[utoipa::path(
    get,
    path = "/api/transactions/branch/{branch_id}",
    params(
        ("branch_id" = i32, Path, description = "Branch ID")
    ),
    responses(
        (status = 200, description = "Transactions of the branch", body = TransactionListResponse),
        (status = 400, description = "Invalid branch ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Transactions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(branch_id = branch_id))]
pub async fn get_transactions_by_branch(
    State(state): State<AppState>,
    Path(branch_id): Path<i32>,
) -> Result<Json<DataResponse<Vec<Transaction>>>, AppError> {
    let transactions = TransactionService::list_by_branch(&state.db, branch_id).await?;
    Ok(Json(DataResponse::new(transactions)))
}
