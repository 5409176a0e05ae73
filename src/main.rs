use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use muster_requirements::config::Config;
use muster_requirements::http;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger. Records from the `log` macros are bridged by the subscriber.
    tracing_subscriber::fmt::init();
    log::set_max_level(LevelFilter::Trace);

    // A deployed instance is configured from the environment, so a missing `.env` is fine.
    if let Err(err) = dotenv::dotenv() {
        log::debug!("no .env file loaded: {}", err);
    }

    // Parse our configuration from the environment.
    // This will exit with a help message if something is wrong.
    let config = Config::parse();

    http::serve(config).await?;

    Ok(())
}
