use anyhow::Context;
use tracing::info;

use linkdeck::api::HttpApiClient;
use linkdeck::clipboard::SystemClipboard;
use linkdeck::config;
use linkdeck::logging::init_logging;
use linkdeck::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_config();
    let config = config::get_config();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(config);
    info!(
        "linkdeck v{} starting, api base: {}",
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    let client = HttpApiClient::new(&config.api.base_url, config.api.timeout_secs)
        .context("failed to construct API client")?;

    tui::run_tui(Box::new(client), Box::new(SystemClipboard), config)
        .await
        .context("TUI terminated with an error")?;

    info!("linkdeck exiting");
    Ok(())
}
