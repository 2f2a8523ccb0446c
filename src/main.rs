use tracing_subscriber::EnvFilter;

use tunematch_api::api::{create_router, AppState};
use tunematch_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunematch_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
