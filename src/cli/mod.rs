//! CLI module for lorenzviz.
//!
//! All CLI logic lives here rather than in main.rs so it can be covered
//! by tests. The entry point `run_cli` is called from main.rs with parsed
//! arguments.

mod args;
mod commands;

pub use args::{Args, Command};
pub use commands::{print_help, print_version, run_cli};
