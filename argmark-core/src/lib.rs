//! `argmark` Core - shared usage guide schema and error types
//!
//! This crate provides the configuration types and error types shared
//! across `argmark` (CLI) and `argmark-docs` (markdown rendering and
//! splicing).

pub mod config;
pub mod error;
