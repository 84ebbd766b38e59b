//! Token signing configuration.
//!
//! Access and refresh tokens are signed with two independent secrets. When a
//! secret is not configured a fixed, publicly known default is used so that a
//! development instance still boots; production deployments must set both.
//!
//! # Environment Variables
//!
//! - `JWT_ACCESS_SECRET`: secret for access tokens
//! - `JWT_REFRESH_SECRET`: secret for refresh tokens
//! - `JWT_ACCESS_EXPIRY`: access token lifetime in seconds (default: 3600)
//! - `JWT_REFRESH_EXPIRY`: refresh token lifetime in seconds (default: 2592000)
//!
//! Lifetimes outside `1..=MAX_TOKEN_EXPIRY` fall back to the default.

use std::env;

pub const DEFAULT_ACCESS_SECRET: &str = "default-access-secret-change-in-production";
pub const DEFAULT_REFRESH_SECRET: &str = "default-refresh-secret-change-in-production";

/// 1 hour
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 60 * 60;
/// 30 days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 30 * 24 * 60 * 60;
/// 10 years
pub const MAX_TOKEN_EXPIRY: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            access_secret: get("JWT_ACCESS_SECRET")
                .unwrap_or_else(|| DEFAULT_ACCESS_SECRET.to_string()),
            refresh_secret: get("JWT_REFRESH_SECRET")
                .unwrap_or_else(|| DEFAULT_REFRESH_SECRET.to_string()),
            access_token_expiry: get("JWT_ACCESS_EXPIRY")
                .and_then(|s| s.parse().ok())
                .filter(|secs: &i64| (1..=MAX_TOKEN_EXPIRY).contains(secs))
                .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY),
            refresh_token_expiry: get("JWT_REFRESH_EXPIRY")
                .and_then(|s| s.parse().ok())
                .filter(|secs: &i64| (1..=MAX_TOKEN_EXPIRY).contains(secs))
                .unwrap_or(DEFAULT_REFRESH_TOKEN_EXPIRY),
        }
    }

    pub fn access_secret(&self) -> &[u8] {
        self.access_secret.as_bytes()
    }

    pub fn refresh_secret(&self) -> &[u8] {
        self.refresh_secret.as_bytes()
    }

    /// True when either secret still holds its built-in default.
    pub fn uses_default_secrets(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }

    /// True when both kinds would be signed with the same bytes.
    pub fn secrets_collide(&self) -> bool {
        self.access_secret == self.refresh_secret
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}
