//! Token issuance, validation, and refresh.
//!
//! [`TokenService`] owns the [`JwtConfig`] loaded at startup. It is cheap to
//! clone, holds no mutable state, and may be used from any number of requests
//! concurrently.

use chrono::Utc;
use rekap_config::JwtConfig;
use rekap_config::jwt::MAX_TOKEN_EXPIRY;
use serde::Serialize;
use utoipa::ToSchema;

use crate::claims::{Claims, Principal};
use crate::error::AuthError;
use crate::jwt::{decode_token_at, encode_token};

/// Access and refresh token issued together at login or registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone, Debug)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    /// Builds the service, refusing a configuration that signs both kinds with one secret.
    pub fn new(config: JwtConfig) -> Result<Self, AuthError> {
        if config.secrets_collide() {
            return Err(AuthError::Misconfigured(
                "access and refresh secrets must differ",
            ));
        }
        let lifetimes = 1..=MAX_TOKEN_EXPIRY;
        if !lifetimes.contains(&config.access_token_expiry)
            || !lifetimes.contains(&config.refresh_token_expiry)
        {
            return Err(AuthError::Misconfigured(
                "token lifetimes must be positive and at most ten years",
            ));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    pub fn issue_access_token(&self, principal: &Principal) -> Result<String, AuthError> {
        self.issue_access_token_at(principal, Utc::now().timestamp())
    }

    pub fn issue_access_token_at(
        &self,
        principal: &Principal,
        issued_at: i64,
    ) -> Result<String, AuthError> {
        let claims = Claims::new(principal, issued_at, self.config.access_token_expiry);
        encode_token(&claims, self.config.access_secret())
    }

    /// Refresh tokens never carry a branch scope.
    pub fn issue_refresh_token(&self, principal: &Principal) -> Result<String, AuthError> {
        self.issue_refresh_token_at(principal, Utc::now().timestamp())
    }

    pub fn issue_refresh_token_at(
        &self,
        principal: &Principal,
        issued_at: i64,
    ) -> Result<String, AuthError> {
        let unscoped = principal.clone().with_branch(None);
        let claims = Claims::new(&unscoped, issued_at, self.config.refresh_token_expiry);
        encode_token(&claims, self.config.refresh_secret())
    }

    pub fn issue_pair(&self, principal: &Principal) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(principal)?,
            refresh_token: self.issue_refresh_token(principal)?,
        })
    }

    pub fn validate_access_token(&self, token: &str) -> Result<Principal, AuthError> {
        self.access_claims(token).map(|claims| claims.principal())
    }

    pub fn validate_refresh_token(&self, token: &str) -> Result<Principal, AuthError> {
        self.refresh_claims(token).map(|claims| claims.principal())
    }

    pub fn access_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode_token_at(token, self.config.access_secret(), Utc::now().timestamp())
    }

    pub fn refresh_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode_token_at(token, self.config.refresh_secret(), Utc::now().timestamp())
    }

    /// Exchanges a valid refresh token for a new access token for the same principal.
    ///
    /// The refresh token itself is neither rotated nor invalidated and can be
    /// exchanged again until it expires.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let principal = self.validate_refresh_token(refresh_token)?;
        self.issue_access_token(&principal)
    }
}
