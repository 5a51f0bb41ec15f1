use crate::frameworks::config::ServerConfig;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, ManualReviewVerifier};
use std::sync::Arc;
use tokio::net::TcpListener;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the slip handler on an already-bound listener.
pub async fn run(listener: TcpListener, config: &ServerConfig) -> std::io::Result<()> {
    // No bank integration yet: every slip is queued for manual review.
    let state = AppState::new(Arc::new(ManualReviewVerifier), config.max_body_bytes);
    let app = routes::app(state);

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, max_body_bytes = config.max_body_bytes, "listening");
    }

    axum::serve(listener, app).await
}

// Bind the configured address, logging the failure before handing it back.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(addr).await.inspect_err(|error| {
        tracing::error!(%addr, %error, "failed to bind");
    })
}

pub async fn start() -> std::io::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = ServerConfig::from_env();
    let listener = bind(&config).await?;

    run(listener, &config).await.inspect_err(|error| {
        tracing::error!(%error, "server error");
    })
}
