//! Token payload and the authenticated identity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Issuer stamped into every token; tokens carrying any other value are rejected.
pub const ISSUER: &str = "rekap-laundry-api";

/// The authenticated identity derived from a valid token.
///
/// Rebuilt from the signed payload on every validation. Validation never
/// consults storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub user_id: i32,
    pub email: String,
    /// Branch the user is scoped to, if any
    pub branch_id: Option<i32>,
}

impl Principal {
    pub fn new(user_id: i32, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            branch_id: None,
        }
    }

    pub fn with_branch(mut self, branch_id: Option<i32>) -> Self {
        self.branch_id = branch_id;
        self
    }
}

/// Signed token payload.
///
/// Wire names follow the compact token convention: `user_id`, `email`,
/// optional `branch_id`, and the registered `exp`, `iat`, `iss` claims
/// (timestamps in Unix seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i32>,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

impl Claims {
    /// Stamps `principal` with `iat = issued_at` and `exp = issued_at + lifetime_secs`,
    /// saturating at `i64::MAX`.
    pub fn new(principal: &Principal, issued_at: i64, lifetime_secs: i64) -> Self {
        Self {
            user_id: principal.user_id,
            email: principal.email.clone(),
            branch_id: principal.branch_id,
            exp: issued_at.saturating_add(lifetime_secs),
            iat: issued_at,
            iss: ISSUER.to_string(),
        }
    }

    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.user_id,
            email: self.email.clone(),
            branch_id: self.branch_id,
        }
    }

    pub fn lifetime(&self) -> i64 {
        self.exp.saturating_sub(self.iat)
    }
}
