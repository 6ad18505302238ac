//! Version information display
//!
//! Prints version and build metadata in human or JSON format.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::ArgmarkError;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

const INFO: VersionInfo = VersionInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// Print version and build information.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), ArgmarkError> {
    println!("{}", render(args.format)?);
    Ok(())
}

fn render(format: OutputFormat) -> Result<String, ArgmarkError> {
    Ok(match format {
        OutputFormat::Human => format!("{} {}", INFO.name, INFO.version),
        OutputFormat::Json => serde_json::to_string(&INFO)?,
    })
}
