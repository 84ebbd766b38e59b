use axum::{Router, routing::get};

use super::controller::{get_transaction_by_trx_no, get_transactions, get_transactions_by_branch};
use crate::state::AppState;

pub fn init_transactions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_transactions))
        .route("/trx/{trx_no}", get(get_transaction_by_trx_no))
        .route("/branch/{branch_id}", get(get_transactions_by_branch))
}
