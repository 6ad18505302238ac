//! `argmark` Docs - markdown rendering for usage guides
//!
//! Renders [`UsageGuideConfig`](argmark_core::config::UsageGuideConfig)
//! values into markdown and splices the result into existing documents
//! between marker lines. Every function here is pure: strings and config
//! values in, strings out.

pub mod error;
pub mod guide;
pub mod markup;
pub mod options;
pub mod section;
pub mod splice;
pub mod table;

pub use error::SpliceError;
pub use guide::{render_usage_guide, render_usage_guides};
pub use markup::convert;
pub use splice::splice;
