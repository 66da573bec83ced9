//! Command-line front end.
//!
//! Each calculation command feeds the shape name and the raw value text
//! through a [`ShapeForm`], so the command line behaves exactly like the
//! form: empty values are skipped, non-numeric values are rejected.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use shapecalc_core::{
    calculator::render_error, Action, Calculation, ShapeDescriptor, ShapeError, ShapeForm,
    ShapeKind,
};
use shapecalc_settings::{Config, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "shapecalc", version, about = "Area, perimeter and volume calculator")]
pub struct Cli {
    /// Config file (.toml or .json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Significant digits in results
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every supported shape
    List,
    /// Show the parameters of one shape
    Describe {
        /// Shape name, e.g. Cone
        shape: String,
    },
    /// Area and perimeter of a planar shape
    Area(ShapeArgs),
    /// Volume of a solid
    Volume(ShapeArgs),
    /// Area/perimeter or volume, whichever the shape supports
    Calc(ShapeArgs),
}

#[derive(Debug, clap::Args)]
pub struct ShapeArgs {
    /// Shape name, e.g. Rectangle or Triangle3
    pub shape: String,

    /// Measurements in parameter order (at most five are read)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Execute `cli`, writing results to `out`.
///
/// Returns `Ok(false)` when the printed result is an error message such as
/// "Invalid parameters"; `Err` is reserved for configuration and I/O
/// failures.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<bool> {
    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = apply_overrides(cli, config)?;
    execute(cli, &config, out)
}

/// Execute `cli` against an already resolved configuration
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> anyhow::Result<bool> {
    let output = config.display.output_format;
    debug!(?output, command = ?cli.command, "running command");

    match &cli.command {
        Command::List => {
            let descriptors: Vec<_> = ShapeKind::ALL.iter().map(|k| k.descriptor()).collect();
            match output {
                OutputFormat::Text => {
                    for d in &descriptors {
                        writeln!(
                            out,
                            "{:<20} {}  {}",
                            d.name,
                            d.dimension,
                            d.parameter_names.join(", ")
                        )?;
                    }
                }
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&descriptors)?)?;
                }
            }
            Ok(true)
        }
        Command::Describe { shape } => {
            let mut form = config.build_form();
            let Some(kind) = form.select(shape) else {
                write_error(out, output, &unknown(shape))?;
                return Ok(false);
            };
            write_descriptor(out, output, kind.descriptor())?;
            Ok(true)
        }
        Command::Area(args) => evaluate(config, args, Some(Action::AreaPerimeter), out),
        Command::Volume(args) => evaluate(config, args, Some(Action::Volume), out),
        Command::Calc(args) => evaluate(config, args, None, out),
    }
}

/// Apply command-line overrides on top of file values
pub fn apply_overrides(cli: &Cli, mut config: Config) -> anyhow::Result<Config> {
    if let Some(precision) = cli.precision {
        config.display.significant_digits = precision;
    }
    if let Some(format) = cli.format {
        config.display.output_format = format;
    }
    config.validate().context("Invalid option")?;
    Ok(config)
}

fn evaluate<W: Write>(
    config: &Config,
    args: &ShapeArgs,
    action: Option<Action>,
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut form = config.build_form();
    form.select(&args.shape);
    form.set_fields(&args.values);

    let action = action.unwrap_or(form.layout().action);
    let outcome = form.evaluate(action);
    write_outcome(out, config, &form, &outcome)?;
    Ok(outcome.is_ok())
}

fn unknown(name: &str) -> ShapeError {
    ShapeError::UnknownShape {
        name: name.to_string(),
    }
}

fn write_outcome<W: Write>(
    out: &mut W,
    config: &Config,
    form: &ShapeForm,
    outcome: &Result<Calculation, ShapeError>,
) -> anyhow::Result<()> {
    match (outcome, config.display.output_format) {
        (Ok(calculation), OutputFormat::Text) => {
            writeln!(out, "{}", calculation.render(&config.number_format()))?;
        }
        (Ok(calculation), OutputFormat::Json) => {
            let input: Vec<&str> = form
                .fields()
                .iter()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .collect();
            let value = json!({
                "shape": form.selected(),
                "input": input,
                "result": calculation,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        (Err(error), format) => write_error(out, format, error)?,
    }
    Ok(())
}

fn write_error<W: Write>(
    out: &mut W,
    format: OutputFormat,
    error: &ShapeError,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", render_error(error))?,
        OutputFormat::Json => {
            let value = json!({
                "error": render_error(error),
                "detail": error.to_string(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

fn write_descriptor<W: Write>(
    out: &mut W,
    format: OutputFormat,
    descriptor: &ShapeDescriptor,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Name: {}", descriptor.name)?;
            writeln!(out, "Label: {}", descriptor.display_name)?;
            writeln!(out, "Dimension: {}", descriptor.dimension)?;
            writeln!(out, "Parameters: {}", descriptor.parameter_names.join(", "))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(descriptor)?)?;
        }
    }
    Ok(())
}
