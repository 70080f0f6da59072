use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod diagnostics;
mod openapi;
mod state;

use config::Config;
use state::{AppState, connect_storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Storage is optional and never delays the listener
    let (storage, mongo_client) = connect_storage(&config).await;

    let state = AppState { config, storage };

    let api_routes = api::routes(&state);
    let root_routes = api::root_routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, root_routes)?;

    info!("Starting Webino Solutions API (30s shutdown timeout)");

    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                drop(client);
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Webino Solutions API shutdown complete");
    Ok(())
}
