//! Command execution context
//!
//! Loads configuration once and builds the normalizer shared by commands.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::request::Normalizer;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Normalizer built from the configuration
    pub normalizer: Normalizer,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config from the override path (or default location) and build
    /// the normalizer.
    ///
    /// # Errors
    /// Returns error if an explicit config file is missing or invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let normalizer = config.normalizer();

        log::debug!(
            "Source: {}, required prefix: {:?}, {} aliases",
            normalizer.source(),
            normalizer.required_prefix(),
            normalizer.aliases().len()
        );

        Ok(Self {
            config,
            normalizer,
            format: opts.format,
        })
    }
}
