use anyhow::Context;
use dotenvy::dotenv;
use rekap::logging::init_tracing;
use rekap::router::init_router;
use rekap::state::init_app_state;
use rekap_config::server::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await?;

    if std::env::var("RUN_MIGRATIONS").is_ok_and(|v| v == "true" || v == "1") {
        rekap_db::run_migrations(&state.db)
            .await
            .context("Failed to run migrations")?;
    }

    let server = ServerConfig::from_env();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server.addr())
        .await
        .with_context(|| format!("Failed to bind {}", server.addr()))?;

    info!(addr = %server.addr(), "server listening");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
