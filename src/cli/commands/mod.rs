//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod guide;
pub mod version;
pub mod write;

use crate::cli::args::{Cli, Commands};
use crate::error::ArgmarkError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), ArgmarkError> {
    match cli.command {
        Commands::Write(args) => write::run(&args, cli.quiet),
        Commands::Guide(args) => guide::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}
