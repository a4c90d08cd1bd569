//! Charpipe CLI library
//!
//! This library provides the command-line interface for the charpipe
//! byte stream transduction toolkit.

pub mod commands;
pub mod error;
pub mod output;
pub mod stream;

pub use error::{exit_code, CliResult};
