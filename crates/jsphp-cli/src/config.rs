//! `jsphp.json` loading and option resolution.
//!
//! Command-line flags win over the config file. Relative paths in the config
//! file resolve against the directory holding it; relative paths given on the
//! command line resolve against the working directory.

use anyhow::{Context, Result, bail};
use jsphp_runtime::{DEFAULT_ENCODING, DEFAULT_SENTINEL, RuntimeOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::args::{AnnotateArgs, RuntimeArgs};

pub const CONFIG_FILE_NAME: &str = "jsphp.json";

/// Template used when neither `--template` nor `runtime.template` is given.
pub const DEFAULT_TEMPLATE: &str = "tests.php";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsphpConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub annotate: AnnotateConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub sentinel: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateConfig {
    #[serde(default)]
    pub pretty: Option<bool>,
}

/// A config file together with where it was read from.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub config: JsphpConfig,
}

impl ConfigFile {
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Runtime settings after merging flags, config and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedRuntime {
    pub template: PathBuf,
    pub root: PathBuf,
    pub options: RuntimeOptions,
}

pub fn parse_config(source: &str) -> Result<JsphpConfig> {
    serde_json::from_str(source).context("invalid jsphp config")
}

pub fn load_config(path: &Path) -> Result<JsphpConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Load `explicit` (a file, or a directory holding `jsphp.json`), or else
/// `jsphp.json` in `cwd` when it exists.
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<ConfigFile>> {
    let path = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if path.is_dir() {
                path.join(CONFIG_FILE_NAME)
            } else {
                path
            }
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };
    let config = load_config(&path)?;
    debug!(path = %path.display(), "loaded config");
    Ok(Some(ConfigFile { path, config }))
}

pub fn resolve_runtime(
    args: &RuntimeArgs,
    config: Option<&ConfigFile>,
    cwd: &Path,
) -> Result<ResolvedRuntime> {
    let default_section = RuntimeConfig::default();
    let section = config.map_or(&default_section, |file| &file.config.runtime);
    let base = config.map_or(cwd, ConfigFile::dir);

    let template = match (&args.template, &section.template) {
        (Some(flag), _) => cwd.join(flag),
        (None, Some(configured)) => base.join(configured),
        (None, None) => cwd.join(DEFAULT_TEMPLATE),
    };

    let root = match (&args.root, &section.root) {
        (Some(flag), _) => cwd.join(flag),
        (None, Some(configured)) => base.join(configured),
        (None, None) => template.parent().unwrap_or(cwd).to_path_buf(),
    };

    let sentinel = section
        .sentinel
        .clone()
        .unwrap_or_else(|| DEFAULT_SENTINEL.to_string());
    if sentinel.is_empty() {
        bail!("runtime.sentinel must not be empty");
    }
    let encoding = section
        .encoding
        .clone()
        .unwrap_or_else(|| DEFAULT_ENCODING.to_string());

    Ok(ResolvedRuntime {
        template,
        root,
        options: RuntimeOptions {
            sentinel,
            timezone: args.timezone.clone().or_else(|| section.timezone.clone()),
            encoding,
        },
    })
}

pub fn resolve_pretty(args: &AnnotateArgs, config: Option<&ConfigFile>) -> bool {
    args.pretty
        || config
            .and_then(|file| file.config.annotate.pretty)
            .unwrap_or(false)
}
