use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tag_scraper::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    init_tracing(config.debug)?;

    let server_addr = config.server_addr;
    match config.fetch_timeout {
        Some(timeout) => tracing::info!(?timeout, "outbound fetch timeout set"),
        None => tracing::info!("outbound fetch timeout not set"),
    }

    // Create application state
    let app_state = AppState::new(&config)?;

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| format!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
