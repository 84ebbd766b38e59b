use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use rekap_auth::{AuthError, TokenService};
use rekap_core::{AppError, hash_password, verify_password};
use rekap_models::{
    AccessTokenResponse, AuthResponse, LoginRequest, NewUser, RefreshTokenRequest,
    RegisterRequest,
};
use tokio::task;
use tracing::{info, instrument, warn};

use crate::modules::users::repository::{RepositoryError, UserRepository};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const EMAIL_TAKEN_MESSAGE: &str = "Email is already registered";

/// Hash verified against when the email is unknown, so a miss costs the same
/// bcrypt round as a wrong password.
static TIMING_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("rekap-unknown-account").ok());

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(anyhow!(INVALID_CREDENTIALS_MESSAGE))
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all)]
    pub async fn register(
        users: &dyn UserRepository,
        tokens: &TokenService,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let email = normalize_email(&dto.email);

        if users
            .find_by_email(&email)
            .await
            .context("Failed to look up account")?
            .is_some()
        {
            return Err(AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE)));
        }

        let password = dto.password;
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .context("Failed to process password")??;

        let new_user = NewUser {
            name: dto.name.trim().to_string(),
            email,
            password_hash,
            branch_id: None,
        };

        let user = match users.create(new_user).await {
            Ok(user) => user,
            Err(RepositoryError::DuplicateEmail) => {
                return Err(AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE)));
            }
            Err(err) => {
                return Err(AppError::internal(
                    anyhow::Error::new(err).context("Failed to create account"),
                ));
            }
        };

        let pair = tokens
            .issue_pair(&user.principal())
            .map_err(AuthError::into_app_error)?;

        info!(user_id = user.id, "account registered");

        Ok(AuthResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            user,
        })
    }

    /// Unknown email and wrong password produce the same 401.
    #[instrument(skip_all)]
    pub async fn login(
        users: &dyn UserRepository,
        tokens: &TokenService,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let email = normalize_email(&dto.email);

        let credentials = users
            .find_by_email(&email)
            .await
            .context("Failed to look up account")?;

        let (user, stored_hash) = match credentials {
            Some(credentials) => (Some(credentials.user), Some(credentials.password_hash)),
            None => (None, None),
        };

        let password = dto.password;
        let verified = task::spawn_blocking(move || match stored_hash {
            Some(hash) => verify_password(&password, &hash),
            None => {
                if let Some(hash) = TIMING_HASH.as_deref() {
                    let _ = verify_password(&password, hash);
                }
                Ok(false)
            }
        })
        .await
        .context("Failed to verify password")?;

        let user = match (user, verified) {
            (Some(user), Ok(true)) => user,
            (Some(user), Err(err)) => {
                warn!(
                    user_id = user.id,
                    error = %err.message(),
                    "stored password hash is unusable"
                );
                return Err(invalid_credentials());
            }
            _ => {
                info!("login rejected");
                return Err(invalid_credentials());
            }
        };

        let pair = tokens
            .issue_pair(&user.principal())
            .map_err(AuthError::into_app_error)?;

        info!(user_id = user.id, "login succeeded");

        Ok(AuthResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            user,
        })
    }

    /// Mints a new access token. The presented refresh token is neither rotated
    /// nor revoked.
    #[instrument(skip_all)]
    pub fn refresh(
        tokens: &TokenService,
        dto: RefreshTokenRequest,
    ) -> Result<AccessTokenResponse, AppError> {
        let access_token = tokens
            .refresh(&dto.refresh_token)
            .map_err(AuthError::into_app_error)?;

        Ok(AccessTokenResponse { access_token })
    }
}
