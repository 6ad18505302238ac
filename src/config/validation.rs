//! Usage guide validation
//!
//! Checks a deserialized [`UsageGuideConfig`] for problems the renderers
//! would otherwise pass through silently. Validation collects every issue
//! instead of stopping at the first one.

use std::collections::HashMap;

use argmark_core::config::{ContentSection, OptionDescriptor, UsageGuideConfig};
use argmark_core::error::{Severity, ValidationIssue};

/// Deepest heading markdown renders.
const MAX_HEADING_LEVEL: u8 = 6;

// ============================================================================
// Public API
// ============================================================================

/// Result of guide validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (the guide is rejected).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Usage guide validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a guide and returns the result.
    pub fn validate(&mut self, config: &UsageGuideConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        let options = config.option_list();
        self.validate_aliases(&options);
        self.validate_levels(config);
        self.validate_sections(config, &options);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Options
    // ========================================================================

    fn validate_aliases(&mut self, options: &[OptionDescriptor]) {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for option in options {
            let Some(alias) = option.alias.as_deref() else {
                continue;
            };
            let path = format!("options.{}.alias", option.name);

            if alias.chars().count() != 1 {
                self.add_error(
                    &path,
                    &format!("alias must be a single character, got '{alias}'"),
                );
            }

            if let Some(previous) = seen.insert(alias, &option.name) {
                self.add_error(
                    &path,
                    &format!("duplicate alias '{alias}' (also used by '{previous}')"),
                );
            }
        }
    }

    // ========================================================================
    // Sections
    // ========================================================================

    fn validate_levels(&mut self, config: &UsageGuideConfig) {
        let parse_options = &config.parse_options;

        self.check_level(
            "parse_options.default_header_level",
            parse_options.default_header_level,
        );
        self.check_level(
            "parse_options.options_header_level",
            parse_options.options_header_level,
        );
        self.check_content_sections(
            "parse_options.header_sections",
            &parse_options.header_sections,
        );
        self.check_content_sections(
            "parse_options.footer_sections",
            &parse_options.footer_sections,
        );

        for (index, section) in parse_options.options_sections.iter().enumerate() {
            self.check_level(
                &format!("parse_options.options_sections[{index}].header_level"),
                section.header_level,
            );
        }
    }

    fn check_content_sections(&mut self, base_path: &str, sections: &[ContentSection]) {
        for (index, section) in sections.iter().enumerate() {
            self.check_level(
                &format!("{base_path}[{index}].header_level"),
                section.header_level,
            );
        }
    }

    fn check_level(&mut self, path: &str, level: Option<u8>) {
        match level {
            Some(0) => self.add_error(path, "header level must be at least 1"),
            Some(level) if level > MAX_HEADING_LEVEL => self.add_warning(
                path,
                &format!("header level {level} is deeper than markdown renders ({MAX_HEADING_LEVEL})"),
            ),
            _ => {}
        }
    }

    fn validate_sections(&mut self, config: &UsageGuideConfig, options: &[OptionDescriptor]) {
        if options.is_empty() {
            return;
        }

        for (index, section) in config.parse_options.options_sections.iter().enumerate() {
            if !options.iter().any(|option| section.group.matches(option)) {
                self.add_warning(
                    &format!("parse_options.options_sections[{index}]"),
                    "section selects no options and renders an empty table",
                );
            }
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
