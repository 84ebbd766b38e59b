use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs one line when a request arrives and one when it completes, tagged with
/// a per-request id. The level follows the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = uuid::Uuid::new_v4();

    info!(%request_id, %method, %path, "Incoming request");

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    match status {
        500..=599 => error!(%request_id, %method, %path, status, latency_ms, "Server error"),
        400..=499 => warn!(%request_id, %method, %path, status, latency_ms, "Client error"),
        _ => info!(%request_id, %method, %path, status, latency_ms, "Request completed"),
    }

    response
}

fn default_filter() -> String {
    format!(
        "{}=debug,tower_http=debug,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default filter. `LOG_FORMAT=json` switches the
/// console output to one JSON object per event.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let (console_layer, json_layer) = if json {
        (None, Some(fmt::layer().json().with_current_span(true)))
    } else {
        (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_file(true)
                    .with_line_number(true)
                    .compact(),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .init();
}
