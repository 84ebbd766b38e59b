//! # Rekap Auth
//!
//! Token-based authentication for the Rekap API.
//!
//! - [`claims`]: the signed payload ([`Claims`]) and the identity it carries ([`Principal`])
//! - [`jwt`]: the HS256 token codec
//! - [`service`]: [`TokenService`], which issues, validates, and refreshes tokens
//! - [`error`]: [`AuthError`], the internal failure taxonomy
//!
//! # Token Kinds
//!
//! Access tokens (1 hour) and refresh tokens (30 days) share one payload shape.
//! They are told apart only by the secret that signed them, so a token of one
//! kind never validates as the other.
//!
//! Refresh tokens are not rotated or revoked: a refresh token stays usable
//! until it expires, even after it has been exchanged.
//!
//! # Example
//!
//! ```ignore
//! use rekap_auth::{Principal, TokenService};
//! use rekap_config::JwtConfig;
//!
//! let tokens = TokenService::new(JwtConfig::from_env())?;
//! let pair = tokens.issue_pair(&Principal::new(7, "kasir@rekap.id"))?;
//!
//! let principal = tokens.validate_access_token(&pair.access_token)?;
//! let fresh_access_token = tokens.refresh(&pair.refresh_token)?;
//! ```

pub mod claims;
pub mod error;
pub mod jwt;
pub mod service;

// Re-export commonly used types at crate root
pub use claims::{Claims, ISSUER, Principal};
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_at, encode_token};
pub use service::{TokenPair, TokenService};
