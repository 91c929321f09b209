//! CLI module for animaldb
//!
//! Provides command-line interface for:
//! - serve: Load the mirror and serve the HTTP API
//! - init: Create an empty mirror file
//! - query: One-shot filter or lookup against a mirror file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, QueryArgs, ServeArgs};
pub use commands::{init, query, resolve_config, run, run_command, run_query, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
