//! CLI module for rosterdb
//!
//! Provides:
//! - argument parsing and configuration loading
//! - the interactive menu shell over stdin/stdout

mod args;
mod commands;
mod errors;
mod io;
mod shell;

pub use args::Cli;
pub use commands::{run, run_command, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::Prompter;
pub use shell::{MenuChoice, Shell, BANNER, FAREWELL, INVALID_CHOICE, NO_STUDENTS};
