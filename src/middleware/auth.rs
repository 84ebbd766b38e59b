use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use rekap_auth::{AuthError, Principal, TokenService};
use rekap_core::AppError;

use crate::state::AppState;

/// The principal attached to a request that passed the auth gate.
///
/// Handlers behind [`require_auth`] read it from the request extensions. Used
/// on an ungated route, the extractor validates the `Authorization` header
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn branch_id(&self) -> Option<i32> {
        self.0.branch_id
    }
}

/// Splits `Bearer <token>` into its token.
///
/// The scheme is case-insensitive, separated by exactly one space, and the
/// token must be non-empty with no embedded whitespace.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case("bearer")
        || token.is_empty()
        || token.contains(char::is_whitespace)
    {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

/// Resolves the access token carried in `headers` into a principal.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<Principal, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Missing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    if value.trim().is_empty() {
        return Err(AuthError::Missing);
    }

    let token = parse_bearer(value)?;
    tokens.validate_access_token(token)
}

/// Gate for protected routers. Rejects with 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal =
        authenticate(req.headers(), &state.tokens).map_err(AuthError::into_app_error)?;

    tracing::debug!(user_id = principal.user_id, "request authenticated");
    req.extensions_mut().insert(AuthUser(principal));

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let principal =
            authenticate(&parts.headers, &state.tokens).map_err(AuthError::into_app_error)?;

        Ok(AuthUser(principal))
    }
}
