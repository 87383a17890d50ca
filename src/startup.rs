use crate::config::Config;
use crate::error::Error;
use crate::playground::{HttpParseClient, ParseClient, SessionRegistry};
use crate::server::{self, AppState};
use crate::shutdown;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and validate the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the shared state the router runs on
pub fn build_state(config: Config) -> miette::Result<AppState> {
    rust_i18n::set_locale(&config.locale);
    info!("Using locale {}", config.locale);

    let http_client = HttpParseClient::new(config.parse_service_url()?);
    info!("Parsing service at {}", http_client.endpoint());
    let client: Arc<dyn ParseClient> = Arc::new(http_client);

    Ok(AppState {
        sessions: Arc::new(SessionRegistry::new(client, config.max_sessions)),
        config: Arc::new(config),
    })
}

/// Serve the site until a shutdown signal arrives
pub async fn start_server(config: Config) -> miette::Result<()> {
    let addr = config.bind_addr;
    let state = build_state(config)?;
    let sessions = Arc::clone(&state.sessions);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(Error::from)?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    // End every playground, dropping requests still in flight
    sessions.shutdown_all().await;
    info!("Server shut down");

    Ok(())
}
