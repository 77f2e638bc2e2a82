use tracing::info;
use tracing_subscriber::EnvFilter;

use quoter_api::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::new();
    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    info!("quoter listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
