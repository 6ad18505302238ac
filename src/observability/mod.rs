//! Observability module
//!
//! Logging setup for `argmark` commands.

pub mod logging;

pub use logging::{LogFormat, init_logging};
