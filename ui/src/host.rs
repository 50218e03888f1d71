//! Composition root: turns loaded configuration into a running style cache
//! and answers CLI commands against it.

use crate::cli::Command;
use crate::config::{AppConfig, ConfigValidationError};
use crate::error::AppResult;
use crate::switcher::ThemeSwitcher;
use server::style_cache::StyleCache;
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

/// Logs every validation problem as a warning. Startup continues regardless.
pub fn report_validation(config: &AppConfig) -> Vec<ConfigValidationError> {
    match config.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => {
            for error in &errors {
                log::warn!("Configuration warning: {error}");
            }
            errors
        }
    }
}

/// Builds the Bootswatch-backed cache and kicks off background population.
pub fn start_cache(config: &AppConfig) -> AppResult<StyleCache> {
    let cache = StyleCache::from_config(config.themes().clone(), config.cache().clone())?;

    if cache.start_population() {
        log::info!("Theme catalog loading from {}", config.themes().api_url());
    }

    Ok(cache)
}

/// Runs one command, writing its output to `out`.
pub async fn run_command<W: Write>(
    command: &Command,
    config: &AppConfig,
    switcher: Option<&ThemeSwitcher>,
    out: &mut W,
) -> AppResult<ExitCode> {
    match command {
        Command::Validate => validate(config, out),
        Command::Config => {
            let rendered = config
                .effective()
                .to_toml()
                .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
            write!(out, "{rendered}")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::List | Command::Show { .. } | Command::Render { .. } | Command::Reload => {
            let Some(switcher) = switcher else {
                return Err(crate::error::AppError::Config(
                    "Theme catalog was not initialized".to_string(),
                ));
            };
            run_catalog_command(command, switcher, out).await
        }
    }
}

async fn run_catalog_command<W: Write>(
    command: &Command,
    switcher: &ThemeSwitcher,
    out: &mut W,
) -> AppResult<ExitCode> {
    let cache = switcher.cache();

    match command {
        Command::List => {
            let styles = cache.get_all().await;
            for style in &styles {
                writeln!(
                    out,
                    "{:<12} {}",
                    style.name(),
                    style.stylesheet_url().unwrap_or("-")
                )?;
            }
            log::debug!("Listed {} themes", styles.len());
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { name } => {
            let style = cache.get_by_name(Some(name)).await;
            if style.is_empty() {
                writeln!(out, "Theme '{name}' not found")?;
                return Ok(ExitCode::FAILURE);
            }
            let json = serde_json::to_string_pretty(&style)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            writeln!(out, "{json}")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Render { cookie } => {
            let selection = switcher.selection(cookie.as_deref());
            let href = switcher.stylesheet_url(&selection).await;

            writeln!(
                out,
                "<link rel=\"stylesheet\" href=\"{}\">",
                crate::switcher::escape_html(&href)
            )?;
            writeln!(out, "<html{}>", switcher.html_attributes(&selection))?;
            writeln!(out, "{}", switcher.render(&selection).await)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Reload => {
            let count = cache.reload().await?;
            writeln!(out, "Reloaded {count} themes")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate | Command::Config => Ok(ExitCode::SUCCESS),
    }
}

fn validate<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<ExitCode> {
    match config.validate() {
        Ok(()) => {
            writeln!(out, "Configuration is valid")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            for error in &errors {
                writeln!(out, "{}\n", error.user_message())?;
            }
            writeln!(out, "{} configuration problem(s) found", errors.len())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Waits up to `secs` for the catalog. Zero skips the wait.
pub async fn wait_for_catalog(cache: &StyleCache, secs: u64) -> bool {
    if secs == 0 {
        return cache.is_ready();
    }

    let ready = cache.wait_until_ready(Duration::from_secs(secs)).await;
    if !ready {
        log::warn!("Theme catalog not ready after {secs}s, answering with what is cached");
    }
    ready
}
