//! Verify/write decision table.
//!
//! The `write` command either persists the spliced document or, in verify
//! mode, only checks that the file already holds it. Both inputs are
//! two-valued, so the decision is an exhaustive match over
//! [`Mode`] × [`ContentState`].

/// Placeholder replaced by the document path in verify messages.
pub const FILE_NAME_PLACEHOLDER: &str = "{fileName}";

/// Message printed when verification fails and no custom message is given.
pub const DEFAULT_VERIFY_MESSAGE: &str =
    "'{fileName}' file out of date. Rerun argmark write to update.";

/// What the `write` command was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Check only; never touch the file.
    Verify,
    /// Persist the spliced document when it differs.
    Write,
}

impl Mode {
    /// Maps the `--verify` flag to a mode.
    #[must_use]
    pub const fn from_verify_flag(verify: bool) -> Self {
        if verify { Self::Verify } else { Self::Write }
    }
}

/// Whether the spliced document equals the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    /// Byte-for-byte identical.
    Match,
    /// Any difference, including line endings.
    NoMatch,
}

impl ContentState {
    /// Compares the existing document with the candidate.
    #[must_use]
    pub fn compare(existing: &str, candidate: &str) -> Self {
        if existing == candidate {
            Self::Match
        } else {
            Self::NoMatch
        }
    }
}

/// Result of the verify/write decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Verify mode, document current.
    UpToDate,
    /// Verify mode, document stale. The command fails.
    OutOfDate,
    /// Write mode, nothing to do.
    Unchanged,
    /// Write mode, document must be written.
    Write,
}

impl Outcome {
    /// Decides the outcome for a mode and content state.
    #[must_use]
    pub const fn decide(mode: Mode, state: ContentState) -> Self {
        match (mode, state) {
            (Mode::Verify, ContentState::Match) => Self::UpToDate,
            (Mode::Verify, ContentState::NoMatch) => Self::OutOfDate,
            (Mode::Write, ContentState::Match) => Self::Unchanged,
            (Mode::Write, ContentState::NoMatch) => Self::Write,
        }
    }

    /// Returns `true` if the document must be persisted.
    #[must_use]
    pub const fn writes_file(self) -> bool {
        matches!(self, Self::Write)
    }

    /// Returns `true` if the command must exit unsuccessfully.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::OutOfDate)
    }

    /// Status line for the successful outcomes.
    ///
    /// [`Outcome::OutOfDate`] uses [`format_verify_message`] instead.
    #[must_use]
    pub fn status_message(self, file_name: &str) -> String {
        match self {
            Self::UpToDate => format!("'{file_name}' content as expected. No update required."),
            Self::OutOfDate => format_verify_message(None, file_name),
            Self::Unchanged => format!("'{file_name}' content not modified, not writing to file."),
            Self::Write => format!("Writing file to '{file_name}'"),
        }
    }
}

/// Formats the verification failure message, substituting every
/// `{fileName}` with `file_name`.
#[must_use]
pub fn format_verify_message(template: Option<&str>, file_name: &str) -> String {
    template
        .unwrap_or(DEFAULT_VERIFY_MESSAGE)
        .replace(FILE_NAME_PLACEHOLDER, file_name)
}
