// Nexus Market - Main Entry Point

use nexus_market::{routes, AppState, MarketConfig, SharedState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MarketConfig::from_env();
    info!(?config, "starting nexus market");

    let state: SharedState = match AppState::new(config.clone()) {
        Ok(state) => state.shared(),
        Err(e) => {
            error!(error = %e, "failed to initialize market state");
            std::process::exit(1);
        }
    };

    let shutdown_state = state.clone();
    let app = routes::router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "server running");
    for (method, path, about) in routes::ENDPOINTS {
        info!("   {:<5} {:<22} {}", method, path, about);
    }

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install CTRL+C handler");
        }
        info!("shutdown signal received");
    });

    if let Err(e) = server.await {
        error!(error = %e, "server error");
    }

    match nexus_market::app_state::lock(&shutdown_state) {
        Ok(app_state) => match app_state.save_to_disk() {
            Ok(()) => info!("state saved"),
            Err(e) => error!(error = %e, "failed to save state"),
        },
        Err(e) => error!(error = %e, "state unavailable at shutdown"),
    };
}
