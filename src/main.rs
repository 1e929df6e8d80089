use roomboard::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting roomboard");

    // Load configuration
    let config = startup::load_config().await?;

    // Run until shutdown
    startup::run(config).await
}
