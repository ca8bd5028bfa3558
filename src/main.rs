use clap::Parser;
use index_lookup::app::config::load_dotenv_from;
use index_lookup::app::{init_logging, App, Config};
use std::path::Path;

const DOTENV_FILE: &str = ".env";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = load_dotenv_from(Path::new(DOTENV_FILE))?;
    let config = Config::parse();
    init_logging(&config.log_level);

    tracing::info!("Starting index lookup service");
    if dotenv_loaded {
        tracing::info!("Loaded environment from {}", DOTENV_FILE);
    }
    tracing::debug!("Config: {:?}", config);

    App::new(config).run().await
}
