use axum_helpers::{build_router, create_production_app, health_router};
use core_config::{
    load_dotenv,
    tracing::{init_tracing, install_color_eyre},
};
use events_api::{AppState, Config, api, openapi::ApiDoc};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    load_dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    info!(database = %config.mongodb.database(), "Connected to MongoDB");

    let state = AppState::new(config, mongo_client);

    let routes = api::routes(&state).merge(health_router(state.config.app));
    let app = build_router::<ApiDoc>(routes, &state.config.cors)?;

    info!(
        "Starting {} v{} (30s shutdown timeout)",
        state.config.app.name, state.config.app.version
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Closing MongoDB connections");
        state.mongo_client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}
