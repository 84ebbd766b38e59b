//! Operator commands behind `rekap-cli`.

use anyhow::{Context, anyhow, bail};
use rekap_core::hash_password;
use rekap_models::{NewUser, RegisterRequest, User};
use validator::Validate;

use crate::modules::auth::service::normalize_email;
use crate::modules::users::repository::{RepositoryError, UserRepository};

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub branch_id: Option<i32>,
}

/// Creates an account directly, applying the same rules as registration.
/// This is the only way to give an account a branch scope.
pub async fn create_user(
    users: &dyn UserRepository,
    input: CreateUserInput,
) -> anyhow::Result<User> {
    let request = RegisterRequest {
        name: input.name.trim().to_string(),
        email: normalize_email(&input.email),
        password: input.password,
    };
    request.validate().context("Invalid account details")?;

    let password_hash =
        hash_password(&request.password).map_err(|e| anyhow!(e.message()))?;

    let new_user = NewUser {
        name: request.name,
        email: request.email,
        password_hash,
        branch_id: input.branch_id,
    };

    match users.create(new_user).await {
        Ok(user) => Ok(user),
        Err(RepositoryError::DuplicateEmail) => bail!("User with this email already exists"),
        Err(err) => Err(anyhow::Error::new(err).context("Failed to create user")),
    }
}
