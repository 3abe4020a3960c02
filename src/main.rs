use fleet_tracker::server::{
    config::Config,
    error::AppError,
    router, startup,
    state::{AppState, RoutingSettings},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed(&db).await?;

    let http_client = startup::setup_reqwest_client()?;
    if config.routing_api_key.is_none() {
        tracing::warn!("ROUTING_API_KEY is not set, dispatching is disabled");
    }

    let state = AppState::new(
        db,
        http_client,
        RoutingSettings {
            api_url: config.routing_api_url,
            api_key: config.routing_api_key,
        },
        config.active_asset_window,
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router::app(state)).await?;

    Ok(())
}
