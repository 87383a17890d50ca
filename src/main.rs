use flowdate::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Flowdate");

    // Load configuration
    let config = startup::load_config()?;

    // Serve the site
    startup::start_server(config).await
}
