use axum::Json;
use rekap_auth::Principal;
use tracing::instrument;

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;

/// Get the authenticated principal
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current principal", body = Principal),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = auth_user.user_id()))]
pub async fn get_me(auth_user: AuthUser) -> Json<Principal> {
    Json(auth_user.0)
}
