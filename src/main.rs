use clap::Parser;
use swissarmybar::bootstrap::{self, wiring, RuntimeConfig};
use swissarmybar::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = wiring::resolve_app_paths()?;
    let app_config = match &cli.config {
        Some(path) => bootstrap::load_config(path)?,
        None => bootstrap::load_config_or_default(&paths.config_path)?,
    };
    let config = RuntimeConfig::resolve(&app_config, &paths);

    bootstrap::tracing::init_tracing_subscriber(config.logs_dir.as_deref())?;
    tracing::debug!(?config, "Configuration resolved");

    bootstrap::run_command(cli.command, config).await
}
