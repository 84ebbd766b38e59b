//! User account models.
//!
//! [`User`] is the public record and is safe to serialize. The stored password
//! hash only ever lives in [`UserCredentials`], which is not `Serialize`.

use chrono::{DateTime, Utc};
use rekap_auth::Principal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Branch the account is scoped to (set by an operator, never at registration)
    pub branch_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.email.clone()).with_branch(self.branch_id)
    }
}

/// A user row together with its bcrypt hash, used only for login.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

/// Insert payload for a new account. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub branch_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 9,
            name: "Siti".to_string(),
            email: "siti@rekap.id".to_string(),
            branch_id: Some(4),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_principal_from_user() {
        let principal = user().principal();
        assert_eq!(principal.user_id, 9);
        assert_eq!(principal.email, "siti@rekap.id");
        assert_eq!(principal.branch_id, Some(4));
    }

    #[test]
    fn test_user_serialization_has_no_password() {
        let value = serde_json::to_value(user()).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
        assert_eq!(value["email"], "siti@rekap.id");
    }
}
