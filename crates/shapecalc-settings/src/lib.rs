//! shapecalc settings crate
//!
//! Handles application configuration and its persistence.

pub mod config;

pub use config::{Config, DisplaySettings, FormSettings, OutputFormat, CONFIG_FILE_NAME};
