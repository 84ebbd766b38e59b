use axum::{Router, routing::get};

use super::controller::{get_daily_summary, get_range_summary};
use crate::state::AppState;

pub fn init_summary_router() -> Router<AppState> {
    Router::new()
        .route("/daily", get(get_daily_summary))
        .route("/range", get(get_range_summary))
}
