use axum_extra::extract::cookie::Key;
use outlay::config::CONFIG;
use outlay::web::{self, AppState};
use outlay::{InMemorySessions, InMemoryStorage, LedgerService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();

    let storage = InMemoryStorage::new();
    let sessions = InMemorySessions::new(CONFIG.session_ttl_secs);
    let service = Arc::new(LedgerService::new(storage, sessions));

    let state = AppState {
        service,
        cookie_key: Key::derive_from(CONFIG.session_secret.as_bytes()),
    };

    let app = web::routes(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
