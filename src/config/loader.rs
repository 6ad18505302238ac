//! Guide and settings file loader
//!
//! Loading pipeline for a guide file:
//! 1. Read the file (a leading UTF-8 BOM is dropped)
//! 2. Parse as JSON (`.json`) or YAML (anything else)
//! 3. Look up every requested export key; missing keys are skipped with a
//!    warning
//! 4. Deserialize each export into a [`UsageGuideConfig`]
//! 5. Validation
//!
//! Settings files go through steps 1 and 2, then an optional dotted path
//! selects the object holding the settings.

use std::path::{Path, PathBuf};

use serde_json::Value;

use argmark_core::config::UsageGuideConfig;
use argmark_core::error::ConfigError;

use crate::config::settings::{DEFAULT_EXPORT, WriteSettings};
use crate::config::validation::Validator;

// ============================================================================
// Public API
// ============================================================================

/// Result of loading one guide file.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Guides found, in export order.
    pub guides: Vec<UsageGuideConfig>,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during guide loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

/// Guide file loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    exports: Vec<String>,
}

impl ConfigLoader {
    /// Creates a loader looking up the given export keys.
    #[must_use]
    pub const fn new(exports: Vec<String>) -> Self {
        Self { exports }
    }

    /// Creates a loader looking up the default export only.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(vec![DEFAULT_EXPORT.to_string()])
    }

    /// Loads every requested export from a guide file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - Parsing fails or the root is not a mapping
    /// - An export does not deserialize into a guide
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let root = read_document(path)?;
        let Value::Object(exports) = &root else {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                message: "expected a mapping of export names to guides".to_string(),
            });
        };

        let mut result = LoadResult::default();

        for export in &self.exports {
            let Some(value) = exports.get(export) else {
                let mut message = format!("export '{export}' not found in {}", path.display());
                if let Some(suggestion) = suggest_export(export, exports.keys()) {
                    message.push_str(&format!(" (did you mean '{suggestion}'?)"));
                }
                result.warnings.push(LoadWarning {
                    message,
                    location: Some(path.display().to_string()),
                });
                continue;
            };

            let guide: UsageGuideConfig =
                serde_json::from_value(value.clone()).map_err(|e| ConfigError::ParseError {
                    path: path.to_path_buf(),
                    message: format!("export '{export}' is not a usage guide: {e}"),
                })?;

            let validation = Validator::new().validate(&guide);
            if validation.has_errors() {
                return Err(ConfigError::ValidationError {
                    path: format!("{}#{export}", path.display()),
                    errors: validation.errors,
                });
            }

            result
                .warnings
                .extend(validation.warnings.into_iter().map(|issue| LoadWarning {
                    message: issue.message,
                    location: Some(format!("{export}.{}", issue.path)),
                }));
            result.guides.push(guide);
        }

        Ok(result)
    }
}

/// Loads write settings from a file, optionally below a dotted path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if `json_path`
/// does not resolve, or if the selected value is not a settings object.
pub fn load_settings(path: &Path, json_path: Option<&str>) -> Result<WriteSettings, ConfigError> {
    let root = read_document(path)?;
    let value = match json_path {
        Some(json_path) => resolve_json_path(&root, json_path).ok_or_else(|| {
            ConfigError::InvalidJsonPath {
                path: path.to_path_buf(),
                json_path: json_path.to_string(),
            }
        })?,
        None => &root,
    };

    if !value.is_object() {
        return Err(ConfigError::InvalidValue {
            field: json_path.unwrap_or("<root>").to_string(),
            value: value.to_string(),
            expected: "an object of write settings".to_string(),
        });
    }

    serde_json::from_value(value.clone()).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: format!("invalid write settings: {e}"),
    })
}

/// Reads and parses a JSON or YAML document.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file cannot be read and
/// [`ConfigError::ParseError`] if it does not parse or is empty.
pub fn read_document(path: &Path) -> Result<Value, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    // Handle UTF-8 BOM
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let value: Value = if is_json(path) {
        serde_json::from_str(raw).map_err(|e| parse_error(path, &e))?
    } else {
        serde_yaml::from_str(raw).map_err(|e| parse_error(path, &e))?
    };

    if value.is_null() {
        return Err(ConfigError::ParseError {
            path: path.to_path_buf(),
            message: "file is empty".to_string(),
        });
    }

    Ok(value)
}

/// Walks a dotted path (`configs.writeMarkdown`) through nested objects.
///
/// An empty path selects the root.
#[must_use]
pub fn resolve_json_path<'a>(root: &'a Value, json_path: &str) -> Option<&'a Value> {
    json_path
        .split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |value, segment| value.get(segment))
}

/// Suggests the closest export name for a misspelled one.
///
/// Returns the nearest key within a Damerau-Levenshtein distance of 3.
#[must_use]
pub fn suggest_export<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    candidates
        .into_iter()
        .map(|name| (name, strsim::damerau_levenshtein(input, name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.clone())
}

// ============================================================================
// Helpers
// ============================================================================

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_error(path: &Path, error: &impl std::fmt::Display) -> ConfigError {
    ConfigError::ParseError {
        path: PathBuf::from(path),
        message: error.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
