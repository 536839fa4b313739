use anyhow::{Context, Result};
use clap::Parser;

use jsphp_cli::args::CliArgs;
use jsphp_cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if JSPHP_LOG or RUST_LOG is set.
    // Supports JSPHP_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    jsphp::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    driver::run(&args, &cwd)
}
