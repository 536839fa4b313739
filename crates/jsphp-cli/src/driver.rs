//! Subcommand execution.

use anyhow::{Context, Result};
use jsphp::ProgramInput;
use jsphp_runtime::{FsLoader, build_runtime};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

use crate::args::{AnnotateArgs, CliArgs, Command, RuntimeArgs};
use crate::config::{ConfigFile, discover_config, resolve_pretty, resolve_runtime};

pub fn run(args: &CliArgs, cwd: &Path) -> Result<()> {
    let config = discover_config(args.config.as_deref(), cwd)?;
    match &args.command {
        Command::Annotate(annotate_args) => {
            let report = annotate(annotate_args, config.as_ref(), cwd)?;
            write_output(annotate_args.output.as_deref(), cwd, &report)
        }
        Command::Runtime(runtime_args) => {
            let bundle = runtime(runtime_args, config.as_ref(), cwd)?;
            write_output(runtime_args.output.as_deref(), cwd, &bundle)
        }
    }
}

/// Annotate the input program and render the report as JSON.
pub fn annotate(args: &AnnotateArgs, config: Option<&ConfigFile>, cwd: &Path) -> Result<String> {
    let source = if args.reads_stdin() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read program from stdin")?;
        source
    } else {
        let path = cwd.join(&args.input);
        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read program: {}", path.display()))?
    };

    let mut program: ProgramInput = serde_json::from_str(&source)
        .with_context(|| format!("invalid program document: {}", args.input.display()))?;
    let annotations = program.annotate();
    let report = annotations.to_report();
    info!(
        hoisting = report.hoisting.len(),
        scope_indexes = report.scope_indexes.len(),
        renamed = report.rename_suffixes.len(),
        "annotated program"
    );

    let mut rendered = if resolve_pretty(args, config) {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialize annotation report")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Assemble the runtime bundle from the resolved template.
pub fn runtime(args: &RuntimeArgs, config: Option<&ConfigFile>, cwd: &Path) -> Result<String> {
    let resolved = resolve_runtime(args, config, cwd)?;
    let template = std::fs::read_to_string(&resolved.template).with_context(|| {
        format!(
            "failed to read runtime template: {}",
            resolved.template.display()
        )
    })?;
    let loader = FsLoader::new(&resolved.root);
    let bundle = build_runtime(&template, &loader, &resolved.options)?;
    info!(
        template = %resolved.template.display(),
        bytes = bundle.len(),
        "assembled runtime"
    );
    Ok(bundle)
}

fn write_output(output: Option<&Path>, cwd: &Path, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            let path = cwd.join(path);
            std::fs::write(&path, contents)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")
        }
    }
}
