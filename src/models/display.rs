//! Display model implementations for table and JSON output
//!
//! Display models turn normalization results into CLI-friendly rows with
//! column names suited to `tabled`.

use serde::Serialize;
use tabled::Tabled;

use crate::params::{AliasTable, Parameters, value_text};

/// Alias table row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AliasDisplay {
    /// Short name accepted in requests
    #[tabled(rename = "ALIAS")]
    pub alias: String,

    /// Name the alias is rewritten to
    #[tabled(rename = "CANONICAL")]
    pub canonical: String,
}

impl AliasDisplay {
    /// One row per table entry, in resolution order
    pub fn rows(table: &AliasTable) -> Vec<Self> {
        table
            .iter()
            .map(|(alias, canonical)| Self {
                alias: alias.to_string(),
                canonical: canonical.to_string(),
            })
            .collect()
    }
}

/// Parameter row for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ParamDisplay {
    #[tabled(rename = "PARAMETER")]
    pub name: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl ParamDisplay {
    pub fn rows(params: &Parameters) -> Vec<Self> {
        params
            .iter()
            .map(|(name, value)| Self {
                name: name.to_string(),
                value: value_text(value).into_owned(),
            })
            .collect()
    }
}

/// Labelled field row, used for single-record results such as a resolved
/// key or a normalized request.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FieldDisplay {
    #[tabled(rename = "FIELD")]
    pub field: &'static str,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl FieldDisplay {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
