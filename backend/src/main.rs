use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pkb_dashboard::config::DashboardConfig;
use pkb_dashboard::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Reading configuration");
    let config = DashboardConfig::load()?;

    let app_state = match initialize_backend(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!("Dashboard cannot start: {:#}", e);
            return Err(e);
        }
    };

    let app = create_router(app_state, &config);

    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
