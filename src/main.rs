//! imgkey - object keys and cache keys for image requests

use clap::Parser;

mod cache;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod params;
mod request;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Key { path, prefix } => cli::key::run(&opts, &path, prefix.as_deref()),
        Commands::Source { source } => cli::source::run(&opts, source.as_deref()),
        Commands::Params { query, json } => cli::params::run(&opts, &query, json),
        Commands::Normalize { request } => cli::normalize::run(&opts, &request),
        Commands::Aliases => cli::aliases::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("imgkey version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
