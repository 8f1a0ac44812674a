//! Treebench CLI library
//!
//! This library provides the command-line interface for the treebench
//! parser evaluation system: reading annotation files, running dependency
//! and tagging evaluation, and rendering reports.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::CliError;
