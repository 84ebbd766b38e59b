use std::sync::Arc;

use anyhow::Context;
use rekap_auth::TokenService;
use rekap_config::cors::CorsConfig;
use rekap_config::jwt::JwtConfig;
use rekap_db::{PgPool, init_db_pool};

use crate::modules::users::repository::{PgUserRepository, UserRepository};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub users: Arc<dyn UserRepository>,
    pub tokens: TokenService,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        db: PgPool,
        users: Arc<dyn UserRepository>,
        tokens: TokenService,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            db,
            users,
            tokens,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool().await;

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secrets() {
        tracing::warn!(
            "JWT_ACCESS_SECRET or JWT_REFRESH_SECRET is unset, signing with the built-in default"
        );
    }
    let tokens = TokenService::new(jwt_config).context("Invalid JWT configuration")?;

    Ok(AppState::new(
        db.clone(),
        Arc::new(PgUserRepository::new(db)),
        tokens,
        CorsConfig::from_env(),
    ))
}
