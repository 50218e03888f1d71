use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod app;
pub mod limits;
pub mod switcher;
pub mod validation;

pub use app::{AppConfig, EffectiveConfig};
pub use switcher::SwitcherConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment overrides, e.g. `SWATCH__THEMES__API_URL`
pub const ENV_PREFIX: &str = "SWATCH";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment source used by [`load_config`]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Candidate configuration files, lowest priority first.
///
/// The per-user file (`~/.config/swatch/config.toml` on Unix) is read before
/// `config.toml` in the working directory. Neither has to exist.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);

    let user_dir = if cfg!(unix) {
        dirs::home_dir().map(|home| home.join(".config"))
    } else {
        dirs::config_dir()
    };
    if let Some(dir) = user_dir {
        paths.push(dir.join("swatch").join(CONFIG_FILE_NAME));
    }

    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Loads configuration from files and `SWATCH__*` environment variables.
///
/// An explicit `path` must exist; without one the default locations are tried
/// and missing files are skipped. A `.env` file is loaded first.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();
    load_config_from(path, environment())
}

/// Same as [`load_config`] with a caller supplied environment source.
pub fn load_config_from(path: Option<&Path>, env_source: Environment) -> ConfigLoadResult {
    let mut builder = Config::builder();

    match path {
        Some(path) => {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            for candidate in default_config_paths() {
                builder = builder.add_source(
                    File::from(candidate)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }
    }

    // environment entries override file values
    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
