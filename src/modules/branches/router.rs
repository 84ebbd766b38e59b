use axum::{Router, routing::get};

use super::controller::get_branches;
use crate::state::AppState;

pub fn init_branches_router() -> Router<AppState> {
    Router::new().route("/", get(get_branches))
}
