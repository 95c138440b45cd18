//! lorenzviz CLI - Lorenz attractor simulator and animation builder.

use std::process::ExitCode;

use lorenzviz::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
