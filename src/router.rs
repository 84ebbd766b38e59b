use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::branches::router::init_branches_router;
use crate::modules::summary::router::init_summary_router;
use crate::modules::transactions::router::init_transactions_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub status: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Server is up", body = PingResponse)
    ),
    tag = "Health"
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
        status: "Server is running!".to_string(),
    })
}

/// Routes that require a valid access token.
fn protected_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(init_users_router())
        .nest("/transactions", init_transactions_router())
        .nest("/summary", init_summary_router())
        .nest("/branches", init_branches_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/ping", get(ping))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .merge(protected_router(&state)),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
