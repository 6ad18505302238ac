//! Usage guide configuration schema.
//!
//! Types describing the arguments of a command-line tool and the prose
//! sections surrounding its options tables.

pub mod schema;

pub use schema::*;
