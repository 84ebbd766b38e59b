//! Authentication failures.
//!
//! The variants keep the precise cause for logs. Clients only ever see the
//! collapsed messages produced by [`AuthError::into_app_error`].

use anyhow::anyhow;
use rekap_core::AppError;
use thiserror::Error;

pub const MISSING_HEADER_MESSAGE: &str = "Authorization header is missing";
pub const MALFORMED_HEADER_MESSAGE: &str = "Invalid Authorization format, use: Bearer <token>";
pub const INVALID_TOKEN_MESSAGE: &str = "Token is invalid or expired";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("authorization header is missing")]
    Missing,

    /// Header present but not `Bearer <token>`.
    #[error("authorization header is not a bearer credential")]
    MalformedHeader,

    /// Token could not be parsed or its payload does not match the claims schema.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token was not issued by this service")]
    WrongIssuer,

    /// Token declares an algorithm other than HS256.
    #[error("unexpected signing method")]
    WrongSigningMethod,

    #[error("failed to sign token: {0}")]
    Signing(String),

    #[error("token configuration rejected: {0}")]
    Misconfigured(&'static str),
}

impl AuthError {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::Expired)
    }

    /// True for failures caused by the presented credential rather than the server.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::Signing(_) | AuthError::Misconfigured(_))
    }

    /// Message returned to the caller. Every token-level failure shares one message.
    #[must_use]
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::Missing => MISSING_HEADER_MESSAGE,
            AuthError::MalformedHeader => MALFORMED_HEADER_MESSAGE,
            AuthError::Signing(_) | AuthError::Misconfigured(_) => "Failed to generate token",
            _ => INVALID_TOKEN_MESSAGE,
        }
    }

    /// Collapses the failure into the HTTP error sent to the client.
    pub fn into_app_error(self) -> AppError {
        let message = self.client_message();

        if self.is_client_error() {
            tracing::debug!(reason = %self, "authentication rejected");
            AppError::unauthorized(anyhow!(message))
        } else {
            AppError::internal(anyhow::Error::new(self).context(message))
        }
    }
}
