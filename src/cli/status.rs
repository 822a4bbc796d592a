//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "imgkey Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let exists = config_path.exists();

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let location = config_path.display().to_string();
            if exists {
                println!("Config file: {}", location.as_str().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    location.as_str().cyan(),
                    "(not found, using defaults)".dimmed()
                );
            }
            println!();

            let normalizer = config.normalizer();

            // Source bucket
            if config.source_bucket.is_some() {
                let source = normalizer.source();
                println!("{} Source bucket: {}", "✓".green(), source.bucket);
                if !source.prefix.is_empty() {
                    println!("  Source prefix: {}", source.prefix);
                }
            } else {
                println!("{} No source bucket configured", "○".dimmed());
                println!("  → Set 'source_bucket: bucket/prefix' in the config file");
            }

            // Required prefix
            match normalizer.required_prefix() {
                Some(prefix) => println!("{} Required key prefix: {}", "✓".green(), prefix),
                None => println!("{} No required key prefix", "○".dimmed()),
            }

            // Aliases
            let aliases = normalizer.aliases();
            if aliases.is_empty() {
                println!("{} Alias table is empty", "⚠".yellow());
            } else {
                println!("{} {} parameter aliases", "✓".green(), aliases.len());
            }

            println!();
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
        }
    }

    Ok(())
}
