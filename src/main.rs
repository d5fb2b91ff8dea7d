use catalog_portal::{api::CatalogApi, controller, router, AppState, PortalConfig};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = PortalConfig::from_env()?;
    info!(api = %config.api_base_url, start = %config.start_section, "starting catalog portal");

    let state = AppState::new(CatalogApi::new(&config.api_base_url), &config.start_section);

    tokio::spawn({
        let state = state.clone();
        async move { controller::boot(&state).await }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
