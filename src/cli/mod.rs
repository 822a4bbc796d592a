//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod aliases;
pub mod args;
pub mod context;
pub mod key;
pub mod normalize;
pub mod params;
pub mod source;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// imgkey - object keys and cache keys for image requests
#[derive(Parser, Debug)]
#[command(name = "imgkey")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "IMGKEY_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "IMGKEY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "IMGKEY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the storage object key for a request path
    #[command(after_help = "EXAMPLES:\n  \
            imgkey key /cats/t%C3%AAte.jpg                # Uses configured prefix\n  \
            imgkey key /cats/a.jpg --prefix originals     # originals/cats/a.jpg\n  \
            imgkey key /originals/a.jpg --prefix originals # Not prefixed twice")]
    Key {
        /// Percent-encoded request path
        path: String,

        /// Required key prefix (overrides config; an empty value disables it)
        #[arg(long, short = 'p')]
        prefix: Option<String>,
    },

    /// Split a `bucket/prefix` source string
    Source {
        /// Source string, defaults to the configured source_bucket
        source: Option<String>,
    },

    /// Canonicalize parameters and derive the cache key
    #[command(after_help = "EXAMPLES:\n  \
            imgkey params 'w=300&fm=webp&s=sig'\n  \
            imgkey params --json '{\"w\": 300, \"grayscale\": true}'")]
    Params {
        /// Query string (leading '?' optional), or a JSON object with --json
        query: String,

        /// Read parameters as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Run the full normalization pipeline on `path[?query]`
    #[command(visible_alias = "n")]
    Normalize {
        /// Request target, e.g. /cats/a.jpg?w=300
        request: String,
    },

    /// List the effective parameter alias table
    Aliases,

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}
