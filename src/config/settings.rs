//! Write settings
//!
//! The `write` command reads its settings from command-line flags and,
//! optionally, from a settings file. [`WriteSettings`] is the file form;
//! [`WriteSettings::merge_args`] lays the flags over it and
//! [`WriteSettings::resolve`] fills defaults and checks required values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use argmark_core::config::{MarkerPair, OneOrMany};

use crate::cli::args::WriteArgs;
use crate::error::ArgmarkError;

/// Key of the guide configuration when no export is named.
pub const DEFAULT_EXPORT: &str = "usageGuideInfo";

/// Write settings as found in a settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WriteSettings {
    /// Markdown file to update.
    #[serde(default, alias = "markdownPath", skip_serializing_if = "Option::is_none")]
    pub markdown: Option<PathBuf>,

    /// Guide configuration files.
    #[serde(default, alias = "guideFiles", alias = "jsFile", skip_serializing_if = "Vec::is_empty")]
    pub guide_files: Vec<PathBuf>,

    /// Export names looked up in each guide file.
    #[serde(
        default,
        alias = "export",
        alias = "configImportName",
        skip_serializing_if = "Option::is_none"
    )]
    pub exports: Option<OneOrMany>,

    /// Check instead of write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,

    /// Verification failure message.
    #[serde(default, alias = "verifyMessage", skip_serializing_if = "Option::is_none")]
    pub verify_message: Option<String>,

    /// Marker line below which content is written.
    #[serde(default, alias = "replaceBelow", skip_serializing_if = "Option::is_none")]
    pub replace_below: Option<String>,

    /// Marker line above which content is written.
    #[serde(default, alias = "replaceAbove", skip_serializing_if = "Option::is_none")]
    pub replace_above: Option<String>,

    /// Collapse blank line runs.
    #[serde(
        default,
        alias = "removeDoubleBlankLines",
        skip_serializing_if = "Option::is_none"
    )]
    pub remove_double_blank_lines: Option<bool>,
}

/// Fully resolved settings for one `write` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWrite {
    /// Markdown file to update.
    pub markdown: PathBuf,
    /// Guide configuration files, in order.
    pub guide_files: Vec<PathBuf>,
    /// Export names looked up in each guide file, in order.
    pub exports: Vec<String>,
    /// Check instead of write.
    pub verify: bool,
    /// Verification failure message template.
    pub verify_message: Option<String>,
    /// Marker lines.
    pub markers: MarkerPair,
    /// Collapse blank line runs.
    pub collapse_blank_lines: bool,
}

impl WriteSettings {
    /// Lays command-line flags over file settings. A flag wins whenever it
    /// was given; boolean flags can only switch a setting on.
    #[must_use]
    pub fn merge_args(self, args: &WriteArgs) -> Self {
        Self {
            markdown: args.markdown.clone().or(self.markdown),
            guide_files: if args.guide_files.is_empty() {
                self.guide_files
            } else {
                args.guide_files.clone()
            },
            exports: if args.exports.is_empty() {
                self.exports
            } else {
                Some(OneOrMany::Many(args.exports.clone()))
            },
            verify: if args.verify { Some(true) } else { self.verify },
            verify_message: args.verify_message.clone().or(self.verify_message),
            replace_below: args.replace_below.clone().or(self.replace_below),
            replace_above: args.replace_above.clone().or(self.replace_above),
            remove_double_blank_lines: if args.remove_double_blank_lines {
                Some(true)
            } else {
                self.remove_double_blank_lines
            },
        }
    }

    /// Applies defaults and checks required values.
    ///
    /// # Errors
    ///
    /// Returns [`ArgmarkError::Usage`] if no markdown file or no guide file
    /// was given.
    pub fn resolve(self) -> Result<ResolvedWrite, ArgmarkError> {
        let markdown = self.markdown.ok_or_else(|| {
            ArgmarkError::Usage("no markdown file given (use --markdown)".to_string())
        })?;

        if self.guide_files.is_empty() {
            return Err(ArgmarkError::Usage(
                "no guide file given (use --guide-file)".to_string(),
            ));
        }

        let exports = self
            .exports
            .map(OneOrMany::into_vec)
            .filter(|exports| !exports.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_EXPORT.to_string()]);

        let defaults = MarkerPair::default();

        Ok(ResolvedWrite {
            markdown,
            guide_files: self.guide_files,
            exports,
            verify: self.verify.unwrap_or(false),
            verify_message: self.verify_message,
            markers: MarkerPair {
                below: self.replace_below.unwrap_or(defaults.below),
                above: self.replace_above.unwrap_or(defaults.above),
            },
            collapse_blank_lines: self.remove_double_blank_lines.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmark_core::config::{DEFAULT_REPLACE_ABOVE, DEFAULT_REPLACE_BELOW};

    fn args() -> WriteArgs {
        WriteArgs {
            markdown: Some(PathBuf::from("README.md")),
            guide_files: vec![PathBuf::from("guide.json")],
            ..WriteArgs::default()
        }
    }

    #[test]
    fn test_defaults() {
        let resolved = WriteSettings::default().merge_args(&args()).resolve().unwrap();
        assert_eq!(resolved.exports, vec![DEFAULT_EXPORT]);
        assert_eq!(resolved.markers.below, DEFAULT_REPLACE_BELOW);
        assert_eq!(resolved.markers.above, DEFAULT_REPLACE_ABOVE);
        assert!(!resolved.verify);
        assert!(!resolved.collapse_blank_lines);
    }

    #[test]
    fn test_missing_markdown_is_usage_error() {
        let args = WriteArgs {
            guide_files: vec![PathBuf::from("guide.json")],
            ..WriteArgs::default()
        };
        let err = WriteSettings::default().merge_args(&args).resolve().unwrap_err();
        assert!(matches!(err, ArgmarkError::Usage(ref m) if m.contains("--markdown")));
    }

    #[test]
    fn test_missing_guide_file_is_usage_error() {
        let args = WriteArgs {
            markdown: Some(PathBuf::from("README.md")),
            ..WriteArgs::default()
        };
        let err = WriteSettings::default().merge_args(&args).resolve().unwrap_err();
        assert!(matches!(err, ArgmarkError::Usage(ref m) if m.contains("--guide-file")));
    }

    #[test]
    fn test_file_settings_fill_gaps() {
        let settings: WriteSettings = serde_json::from_str(
            r#"{
                "markdownPath": "docs/usage.md",
                "jsFile": ["a.json", "b.yaml"],
                "configImportName": "cliGuide",
                "verify": true,
                "replaceBelow": "<!-- BEGIN -->",
                "removeDoubleBlankLines": true
            }"#,
        )
        .unwrap();

        let resolved = settings.merge_args(&WriteArgs::default()).resolve().unwrap();
        assert_eq!(resolved.markdown, PathBuf::from("docs/usage.md"));
        assert_eq!(resolved.guide_files.len(), 2);
        assert_eq!(resolved.exports, vec!["cliGuide"]);
        assert!(resolved.verify);
        assert_eq!(resolved.markers.below, "<!-- BEGIN -->");
        assert_eq!(resolved.markers.above, DEFAULT_REPLACE_ABOVE);
        assert!(resolved.collapse_blank_lines);
    }

    #[test]
    fn test_flags_override_file() {
        let settings = WriteSettings {
            markdown: Some(PathBuf::from("from-file.md")),
            guide_files: vec![PathBuf::from("file-guide.json")],
            exports: Some(OneOrMany::One("fromFile".into())),
            verify_message: Some("file message".into()),
            ..WriteSettings::default()
        };
        let args = WriteArgs {
            exports: vec!["fromFlag".into()],
            verify_message: Some("flag message".into()),
            ..args()
        };

        let resolved = settings.merge_args(&args).resolve().unwrap();
        assert_eq!(resolved.markdown, PathBuf::from("README.md"));
        assert_eq!(resolved.guide_files, vec![PathBuf::from("guide.json")]);
        assert_eq!(resolved.exports, vec!["fromFlag"]);
        assert_eq!(resolved.verify_message.as_deref(), Some("flag message"));
    }

    #[test]
    fn test_empty_export_list_falls_back_to_default() {
        let settings = WriteSettings {
            exports: Some(OneOrMany::Many(Vec::new())),
            ..WriteSettings::default()
        };
        let resolved = settings.merge_args(&args()).resolve().unwrap();
        assert_eq!(resolved.exports, vec![DEFAULT_EXPORT]);
    }
}
