use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use swatch::cli::Cli;
use swatch::config::{self, ConfigLoadResult};
use swatch::error::AppError;
use swatch::switcher::ThemeSwitcher;
use swatch::{host, logger};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let app_config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
            return Err(AppError::Config(msg)).context("Cannot start without configuration");
        }
    };

    logger::setup_logger(app_config.logging()).context("Failed to install logger")?;
    host::report_validation(&app_config);

    let switcher = if cli.command.needs_catalog() {
        let cache = host::start_cache(&app_config).context("Failed to create theme catalog")?;
        host::wait_for_catalog(&cache, cli.wait).await;
        Some(ThemeSwitcher::new(cache, app_config.switcher().clone()))
    } else {
        None
    };

    let mut stdout = std::io::stdout().lock();
    let code = host::run_command(&cli.command, &app_config, switcher.as_ref(), &mut stdout)
        .await
        .inspect_err(|e| log::error!("Command failed: {e}"))?;

    Ok(code)
}
