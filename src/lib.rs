//! `argmark` - render command-line usage guides to markdown
//!
//! This library holds the CLI layer: argument parsing, guide file loading
//! and validation, the verify/write decision, and logging setup. Rendering
//! lives in `argmark-docs`; the data model in `argmark-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod outcome;
