//! Key command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::FieldDisplay;
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::output::{self, Formattable};
use crate::request::resolve_key;

/// Result of resolving a request path
#[derive(Debug, Serialize)]
pub struct ResolvedKey {
    pub path: String,
    pub required_prefix: Option<String>,
    pub key: String,
}

impl Formattable for ResolvedKey {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => Ok(format_table(&[
                FieldDisplay::new("path", self.path.as_str()),
                FieldDisplay::new(
                    "required prefix",
                    self.required_prefix.as_deref().unwrap_or("--"),
                ),
                FieldDisplay::new("key", self.key.as_str()),
            ])),
            OutputFormat::Pretty => Ok(format!("{} {}", "Key:".bold(), self.key.as_str().cyan())),
        }
    }
}

/// Run the key command
///
/// An explicit `prefix` replaces the configured one; an empty prefix turns
/// the requirement off.
pub fn run(opts: &GlobalOptions, path: &str, prefix: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let required_prefix = match prefix {
        Some(p) => Some(p).filter(|p| !p.is_empty()),
        None => ctx.normalizer.required_prefix(),
    };

    let key = resolve_key(path, required_prefix)?;

    output::print(
        &ResolvedKey {
            path: path.to_string(),
            required_prefix: required_prefix.map(str::to_string),
            key,
        },
        ctx.format,
    )
}
