//! Bundle assembly.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::RuntimeError;
use crate::loader::SupportLoader;

/// Marks the end of the runtime section in the template.
pub const DEFAULT_SENTINEL: &str = "//</BOILERPLATE>";

pub const DEFAULT_ENCODING: &str = "UTF-8";

static REQUIRE_ONCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"require_once\('(.+?)'\)").expect("require_once pattern is valid"));

#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    pub sentinel: String,
    /// Value of the injected `LOCAL_TZ` constant. `None` uses [`local_timezone`].
    pub timezone: Option<String>,
    pub encoding: String,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        RuntimeOptions {
            sentinel: DEFAULT_SENTINEL.to_string(),
            timezone: None,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Assemble the runtime bundle from `template`.
///
/// Output order: the `LOCAL_TZ` definition, the internal encoding call, then
/// each support file named above the sentinel, joined by newlines.
pub fn build_runtime(
    template: &str,
    loader: &dyn SupportLoader,
    options: &RuntimeOptions,
) -> Result<String, RuntimeError> {
    let Some(end) = template.find(options.sentinel.as_str()) else {
        warn!(sentinel = %options.sentinel, "runtime sentinel missing from template");
        return Err(RuntimeError::RuntimeNotFound {
            sentinel: options.sentinel.clone(),
        });
    };
    let section = &template[..end];

    let timezone = options.timezone.clone().unwrap_or_else(local_timezone);
    let mut output = vec![
        format!("define(\"LOCAL_TZ\", \"{timezone}\");\n"),
        format!("mb_internal_encoding(\"{}\");\n", options.encoding),
    ];

    for caps in REQUIRE_ONCE.captures_iter(section) {
        let path = &caps[1];
        let source = loader.load(path)?;
        output.push(clean_support_source(&source).to_string());
    }

    debug!(files = output.len() - 2, timezone = %timezone, "runtime assembled");
    Ok(output.join("\n"))
}

/// Drop a leading `<?php` open tag and any blank lines around the body.
fn clean_support_source(source: &str) -> &str {
    let body = source.strip_prefix("<?php").unwrap_or(source);
    body.trim_matches('\n')
}

/// Timezone for `LOCAL_TZ`: the `TZ` environment variable when set, else the
/// local UTC offset.
pub fn local_timezone() -> String {
    match std::env::var("TZ") {
        Ok(tz) if !tz.trim().is_empty() => tz,
        _ => chrono::Local::now().format("%:z").to_string(),
    }
}

#[cfg(test)]
#[path = "bundle_unit_tests.rs"]
mod bundle_unit_tests;
