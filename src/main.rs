use clap::Parser;
use shapecalc::cli::{run, Cli};
use shapecalc::init_logging;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if run(&cli, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
