//! # `nestcli`
//!
//! A command-line interface exposing nested command groups (`app`, `image`,
//! `cluster`) whose help output flattens every nested group into its own
//! section of fully qualified commands.
//!
//! ## Usage
//!
//! ```sh
//! cli app build my-app
//! cli app inspect version
//! cli app --help
//! ```
//!
//! Exit codes: 0 on success or help, 1 when a command fails, 2 on usage
//! errors, 3 when the command tree is malformed.

use clap::Parser as _;
use nestcli::cli::Args;
use nestcli::console::RealConsole;
use nestcli::error::CliError;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never mix with command output
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let console = RealConsole::new();
    match nestcli::run(&args, &console) {
        Ok(outcome) => {
            debug!("Finished with {:?}", outcome);
            std::process::exit(0);
        }
        Err(err) => {
            // Already reported to the user by `nestcli::run`
            debug!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<CliError>()
                    .map_or(1, CliError::exit_code),
            );
        }
    }
}
