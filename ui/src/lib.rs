//! # Swatch UI Library
//!
//! Presentation side of the theme catalog: switcher markup for
//! server-rendered pages, cookie-based theme selection, configuration loading
//! and validation, logging setup, and the `swatch` command-line host.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`config`] - Configuration loading, sections and startup validation
//! - [`error`] - Application error type
//! - [`host`] - Wiring of configuration, style cache and commands
//! - [`logger`] - Logging configuration
//! - [`switcher`] - Theme selection and switcher markup
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod logger;
pub mod switcher;

pub use error::{AppError, AppResult};
pub use switcher::{ThemeSelection, ThemeSwitcher};
