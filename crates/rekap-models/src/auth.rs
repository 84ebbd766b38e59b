//! Authentication request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::users::User;

/// Rejects values that are empty once surrounding whitespace is trimmed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank", message = "name is required"))]
    #[schema(example = "Siti Rahma")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "siti@rekap.id")]
    pub email: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    #[schema(example = "rahasia123")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "siti@rekap.id")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "rahasia123")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}

/// Tokens plus the public user record, returned by register and login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access_token: String,
}
