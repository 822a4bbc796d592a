//! Aliases command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::AliasDisplay;
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::output::{self, Formattable};
use crate::params::AliasTable;

impl Formattable for AliasTable {
    fn format(&self, format: OutputFormat) -> Result<String> {
        let rows = AliasDisplay::rows(self);
        match format {
            OutputFormat::Json => Ok(format_json(&rows)?),
            OutputFormat::Table => Ok(format_table(&rows)),
            OutputFormat::Pretty => {
                if rows.is_empty() {
                    return Ok("No aliases configured.".dimmed().to_string());
                }
                let width = rows.iter().map(|r| r.alias.len()).max().unwrap_or(0);
                Ok(rows
                    .iter()
                    .map(|r| format!("{:<width$} → {}", r.alias, r.canonical.as_str().cyan()))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}

/// Run the aliases command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    output::print(ctx.normalizer.aliases(), ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_aliases() {
        let out = AliasTable::default().format(OutputFormat::Pretty).unwrap();
        assert!(out.contains("fm"));
        assert!(out.contains("format"));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_json_aliases() {
        let table = AliasTable::new([("w", "width")]).unwrap();
        let out = table.format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["data"][0]["alias"], "w");
        assert_eq!(value["data"][0]["canonical"], "width");
    }
}
