//! # Swatch Server Library
//!
//! Core library of the swatch theme switcher: loads the Bootswatch theme
//! catalog, falls back to bundled themes when the catalog is unavailable, and
//! keeps an immutable in-memory snapshot for fast concurrent lookups.
//!
//! ## Modules
//!
//! - [`model`] - Theme records and the remote catalog payload
//! - [`provider`] - Theme source client (built-in themes, Bootswatch API, response cache)
//! - [`style_cache`] - Background-populated, lock-free style cache
//! - [`config`] - Tunable durations and endpoints
//! - [`common`] - Error types shared across modules

pub mod common;
pub mod config;
pub mod model;
pub mod provider;
pub mod style_cache;

pub use model::ThemeStyle;
pub use style_cache::{PopulationState, StyleCache};
