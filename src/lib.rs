//! # shapecalc
//!
//! Area, perimeter and volume calculator for common shapes.
//!
//! ## Architecture
//!
//! shapecalc is organized as a workspace with multiple crates:
//!
//! 1. **shapecalc-core** - Shape catalog, registry, calculation dispatch, form model
//! 2. **shapecalc-settings** - Configuration files and defaults
//! 3. **shapecalc** - Command-line front end that integrates both crates
//!
//! ## Supported shapes
//!
//! - **Planar**: Square, Rectangle, Circle, Triangle (base + height),
//!   Triangle (three sides), Trapezoid
//! - **Solid**: Sphere, Cube, Rectangular Prism, Cylinder, Cone

pub mod cli;

pub use shapecalc_core::{
    calculate, calculate_by_name, select_shape, Action, Calculation, Dimension, Error,
    FormLayout, MetricKind, NumberFormat, ParameterError, ParameterSet, Result, ShapeDescriptor,
    ShapeError, ShapeForm, ShapeKind,
};

pub use shapecalc_settings::{Config, DisplaySettings, FormSettings, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for results
/// - RUST_LOG environment variable support (defaults to `warn`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
