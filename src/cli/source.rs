//! Source command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::{Error, Result};
use crate::models::FieldDisplay;
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::output::{self, Formattable};
use crate::request::SourceLocation;

impl Formattable for SourceLocation {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => Ok(format_table(&[
                FieldDisplay::new("bucket", self.bucket.as_str()),
                FieldDisplay::new("prefix", self.prefix.as_str()),
            ])),
            OutputFormat::Pretty => {
                let prefix = if self.prefix.is_empty() {
                    "(none)".dimmed().to_string()
                } else {
                    self.prefix.clone()
                };
                Ok(format!(
                    "{} {}\n{} {}",
                    "Bucket:".bold(),
                    self.bucket,
                    "Prefix:".bold(),
                    prefix
                ))
            }
        }
    }
}

/// Run the source command, falling back to the configured source bucket
pub fn run(opts: &GlobalOptions, source: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let location = match source {
        Some(s) => SourceLocation::parse(s),
        None => {
            let configured = ctx.config.source_bucket.as_deref().ok_or_else(|| {
                Error::Other(
                    "No source given and source_bucket is not configured".to_string(),
                )
            })?;
            SourceLocation::parse(configured)
        }
    };

    output::print(&location, ctx.format)
}
