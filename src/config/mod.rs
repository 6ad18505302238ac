//! Configuration module
//!
//! Loading and validation of guide files, and the settings of the `write`
//! command.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigLoader, LoadResult, LoadWarning, load_settings};
pub use settings::{DEFAULT_EXPORT, ResolvedWrite, WriteSettings};
pub use validation::{ValidationResult, Validator};
