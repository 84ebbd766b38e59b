//! User storage.
//!
//! The credential flow only needs two operations from storage, so they sit
//! behind [`UserRepository`]. The server uses [`PgUserRepository`]; tests
//! substitute an in-memory store.

use std::fmt::Debug;

use async_trait::async_trait;
use rekap_models::{NewUser, User, UserCredentials};
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("email is already registered")]
    DuplicateEmail,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Looks up an account by its (already normalised) email.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserCredentials>, RepositoryError>;

    /// Inserts an account. Fails with [`RepositoryError::DuplicateEmail`] when
    /// the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT id, name, email, branch_id, created_at, updated_at,
                   password AS password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip_all, fields(email = %user.email))]
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, branch_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, branch_id, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.branch_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                RepositoryError::DuplicateEmail
            }
            other => RepositoryError::Database(other),
        })
    }
}
