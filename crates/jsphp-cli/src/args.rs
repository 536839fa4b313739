use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the jsphp binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsphp",
    version,
    about = "Scope annotation and runtime assembly for JavaScript-to-PHP output"
)]
pub struct CliArgs {
    /// Path to a jsphp.json file. Defaults to jsphp.json in the working directory, if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annotate a serialized program and print the annotation report.
    Annotate(AnnotateArgs),
    /// Assemble the PHP runtime support bundle.
    Runtime(RuntimeArgs),
}

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// JSON document with `tree` and `scopes`; `-` reads stdin.
    pub input: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the report.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct RuntimeArgs {
    /// Template listing the support files above the boilerplate sentinel.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory support file paths are relative to. Defaults to the template's directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Value for the LOCAL_TZ constant. Defaults to $TZ or the local UTC offset.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Write the bundle here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl AnnotateArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
