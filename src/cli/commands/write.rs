//! The `write` command
//!
//! Loads usage guides, renders them, splices the result into the target
//! document and then writes or verifies according to the decision table in
//! [`crate::outcome`].

use std::path::Path;

use argmark_core::config::UsageGuideConfig;
use argmark_docs::render_usage_guides;
use argmark_docs::splice::{extract_region, splice};

use crate::cli::args::WriteArgs;
use crate::config::{ConfigLoader, ResolvedWrite, WriteSettings, load_settings};
use crate::error::ArgmarkError;
use crate::outcome::{ContentState, Mode, Outcome, format_verify_message};

/// Run the `write` command.
///
/// # Errors
///
/// Returns an error if settings are incomplete, a file cannot be read or
/// written, a guide file is invalid, the document's markers are
/// inconsistent, or verification fails.
pub fn run(args: &WriteArgs, quiet: bool) -> Result<(), ArgmarkError> {
    let settings = match &args.config_file {
        Some(path) => {
            tracing::info!(file = %path.display(), "loading write settings");
            load_settings(path, args.json_path.as_deref())?
        }
        None => WriteSettings::default(),
    };
    let resolved = settings.merge_args(args).resolve()?;
    let shown = display_path(&resolved.markdown);

    tracing::info!(file = %shown, "loading existing file");
    let existing = std::fs::read_to_string(&resolved.markdown)?;

    let guides = load_guides(&resolved)?;
    let content = render_usage_guides(&guides);

    let candidate = splice(
        &existing,
        &content,
        &resolved.markers,
        resolved.collapse_blank_lines,
    )
    .map_err(|source| ArgmarkError::Splice {
        path: shown.clone(),
        source,
    })?;

    if let Ok(Some(region)) = extract_region(&existing, &resolved.markers) {
        tracing::debug!(bytes = region.len(), "replacing marked region");
    } else {
        tracing::debug!("no markers found, replacing whole file");
    }

    let outcome = Outcome::decide(
        Mode::from_verify_flag(resolved.verify),
        ContentState::compare(&existing, &candidate),
    );
    tracing::debug!(?outcome, "write decision");

    match outcome {
        Outcome::OutOfDate => {
            let message = format_verify_message(resolved.verify_message.as_deref(), &shown);
            tracing::warn!(file = %shown, "document out of date");
            Err(ArgmarkError::VerifyFailed { message })
        }
        Outcome::Write => {
            if !quiet {
                eprintln!("{}", outcome.status_message(&shown));
            }
            std::fs::write(&resolved.markdown, candidate)?;
            Ok(())
        }
        Outcome::UpToDate | Outcome::Unchanged => {
            if !quiet {
                eprintln!("{}", outcome.status_message(&shown));
            }
            Ok(())
        }
    }
}

/// Loads every requested export from every guide file, in order.
fn load_guides(resolved: &ResolvedWrite) -> Result<Vec<UsageGuideConfig>, ArgmarkError> {
    let loader = ConfigLoader::new(resolved.exports.clone());
    let mut guides = Vec::new();

    for path in &resolved.guide_files {
        tracing::info!(file = %path.display(), "loading guide file");
        let result = loader.load(path)?;

        for warning in &result.warnings {
            tracing::warn!(
                location = warning.location.as_deref().unwrap_or("<unknown>"),
                "{}",
                warning.message
            );
        }
        guides.extend(result.guides);
    }

    if guides.is_empty() {
        tracing::warn!(
            exports = %resolved.exports.join(", "),
            "no requested export found in the guide files, rendering empty content"
        );
    }

    tracing::info!(count = guides.len(), "rendering usage guides");
    Ok(guides)
}

/// Path shown in messages: relative to the working directory when possible.
fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
