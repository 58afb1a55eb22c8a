//! botcfg - find bot configuration bundles
//!
//! Command line front end for the `botcfg` library.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

/// Initialize logging
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output with `--verbose`. Logs go to stderr so they never mix with
/// JSON/YAML output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
