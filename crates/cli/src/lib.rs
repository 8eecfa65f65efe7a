//! Glue around the counting sort: record parsing, output formatting, and
//! the `bench`, `sort`, and `generate` commands.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};
