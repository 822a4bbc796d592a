//! Params command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cache::{build_query_string, hash_parameters};
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::{FieldDisplay, ParamDisplay};
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::output::{self, Formattable};
use crate::params::{Parameters, value_text};

/// Canonical parameters with their derived cache identity
#[derive(Debug, Serialize)]
pub struct ParamsReport {
    pub params: Parameters,
    pub query_string: String,
    pub cache_key: String,
}

impl ParamsReport {
    pub fn new(params: Parameters) -> Self {
        Self {
            query_string: build_query_string(&params),
            cache_key: hash_parameters(&params),
            params,
        }
    }
}

impl Formattable for ParamsReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => Ok(table_with_params(
                vec![
                    FieldDisplay::new("query string", self.query_string.as_str()),
                    FieldDisplay::new("cache key", self.cache_key.as_str()),
                ],
                &self.params,
            )),
            OutputFormat::Pretty => Ok(pretty_with_params(
                &[
                    ("Query string", self.query_string.as_str()),
                    ("Cache key", self.cache_key.as_str()),
                ],
                &self.params,
            )),
        }
    }
}

/// Field table followed by a table of parameters
pub(crate) fn table_with_params(fields: Vec<FieldDisplay>, params: &Parameters) -> String {
    format!(
        "{}\n{}",
        format_table(&fields),
        format_table(&ParamDisplay::rows(params))
    )
}

/// Labelled lines followed by an indented parameter list
pub(crate) fn pretty_with_params(fields: &[(&str, &str)], params: &Parameters) -> String {
    let mut lines: Vec<String> = fields
        .iter()
        .map(|&(label, value)| {
            let value = if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value.cyan().to_string()
            };
            format!("{} {}", format!("{}:", label).as_str().bold(), value)
        })
        .collect();

    lines.push(format!("{}", "Parameters:".bold()));
    if params.is_empty() {
        lines.push(format!("  {}", "(none)".dimmed()));
    }
    for (name, value) in params.iter() {
        lines.push(format!("  {} = {}", name, value_text(value)));
    }

    lines.join("\n")
}

/// Run the params command
pub fn run(opts: &GlobalOptions, query: &str, json: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let params = if json {
        Parameters::from_json(query)?
    } else {
        Parameters::from_query(query)
    };

    let report = ParamsReport::new(ctx.normalizer.aliases().resolve(params));
    output::print(&report, ctx.format)
}
