//! Tracing subscriber setup for the `jsphp` binary.
//!
//! Library crates only emit `tracing` events; nothing is printed until a
//! binary installs a subscriber through [`init_tracing`].
//!
//! ```bash
//! # Per-pass summaries
//! JSPHP_LOG=debug jsphp annotate program.json
//!
//! # Every hoisted name, scope and suffix, as an indented tree
//! JSPHP_LOG=trace JSPHP_LOG_FORMAT=tree jsphp annotate program.json
//!
//! # Only the scope passes, as JSON lines
//! JSPHP_LOG="jsphp_scope=trace" JSPHP_LOG_FORMAT=json jsphp annotate program.json
//! ```
//!
//! `JSPHP_LOG` takes precedence over `RUST_LOG`. With neither set no
//! subscriber is installed. Output goes to stderr so stdout stays clean for
//! annotation reports and runtime bundles.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "JSPHP_LOG";
pub const LOG_FORMAT_ENV: &str = "JSPHP_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Flat `tracing-subscriber` lines.
    #[default]
    Text,
    /// Hierarchical output via `tracing-tree`; spans nest per pass.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Unknown values fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter directives in `RUST_LOG` syntax.
    pub directives: String,
    pub format: LogFormat,
}

impl TracingConfig {
    /// Read `JSPHP_LOG`/`RUST_LOG` and `JSPHP_LOG_FORMAT`. `None` when logging
    /// was not requested.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(
        jsphp_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = jsphp_log.or(rust_log)?;
        Some(TracingConfig {
            directives,
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
        })
    }
}

/// Install the global subscriber, if logging was requested.
pub fn init_tracing() {
    let Some(config) = TracingConfig::from_env() else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(&config.directives);

    match config.format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("bogus"), LogFormat::Text);
    }

    #[test]
    fn test_jsphp_log_wins_over_rust_log() {
        let config = TracingConfig::from_vars(
            Some("jsphp_scope=trace".to_string()),
            Some("warn".to_string()),
            Some("tree".to_string()),
        )
        .unwrap();
        assert_eq!(config.directives, "jsphp_scope=trace");
        assert_eq!(config.format, LogFormat::Tree);
    }

    #[test]
    fn test_no_env_means_no_subscriber() {
        assert!(TracingConfig::from_vars(None, None, Some("json".to_string())).is_none());
        let config = TracingConfig::from_vars(None, Some("debug".to_string()), None).unwrap();
        assert_eq!(config.format, LogFormat::Text);
    }
}
