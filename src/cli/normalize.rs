//! Normalize command implementation

use crate::cli::args::GlobalOptions;
use crate::cli::params::{pretty_with_params, table_with_params};
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::FieldDisplay;
use crate::output::json::format_json;
use crate::output::{self, Formattable};
use crate::request::NormalizedRequest;

impl Formattable for NormalizedRequest {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => Ok(table_with_params(
                vec![
                    FieldDisplay::new("bucket", self.bucket.as_str()),
                    FieldDisplay::new("key", self.key.as_str()),
                    FieldDisplay::new("query string", self.query_string.as_str()),
                    FieldDisplay::new("cache key", self.cache_key.as_str()),
                ],
                &self.params,
            )),
            OutputFormat::Pretty => Ok(pretty_with_params(
                &[
                    ("Bucket", self.bucket.as_str()),
                    ("Key", self.key.as_str()),
                    ("Query string", self.query_string.as_str()),
                    ("Cache key", self.cache_key.as_str()),
                ],
                &self.params,
            )),
        }
    }
}

/// Run the normalize command
pub fn run(opts: &GlobalOptions, request: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let normalized = ctx.normalizer.normalize_request(request)?;
    output::print(&normalized, ctx.format)
}
