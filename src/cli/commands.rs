//! CLI command handlers.
//!
//! Execution logic for each CLI command, extracted from main.rs so
//! command behavior is testable.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::LorenzConfig;
use crate::error::LorenzResult;
use crate::export::{write_html, write_json};
use crate::pipeline::build_figure;

use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed
/// arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            out,
            json,
        } => run(config_path.as_deref(), out, json),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Build the figure and write it to the configured output.
#[must_use]
pub fn run(config_path: Option<&Path>, out: Option<PathBuf>, json: bool) -> ExitCode {
    match run_inner(config_path, out, json) {
        Ok(path) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Fallible core of the run command; returns the written path.
pub(crate) fn run_inner(
    config_path: Option<&Path>,
    out: Option<PathBuf>,
    json: bool,
) -> LorenzResult<PathBuf> {
    let config = match config_path {
        Some(path) => LorenzConfig::load(path)?,
        None => LorenzConfig::default(),
    };

    let figure = build_figure(&config)?;

    let path = out.unwrap_or_else(|| {
        if json {
            config.output.path.with_extension("json")
        } else {
            config.output.path.clone()
        }
    });

    if json {
        write_json(&figure, &path)?;
    } else {
        write_html(&figure, &path)?;
    }

    Ok(path)
}

/// Print the help text.
pub fn print_help() {
    println!("lorenzviz - Lorenz attractor simulator and animation builder");
    println!();
    println!("Usage: lorenzviz [COMMAND]");
    println!();
    println!("Commands:");
    println!("  run [CONFIG.yaml] [--out FILE] [--json]");
    println!("      Integrate two particles through the Lorenz system and");
    println!("      write the animated figure (HTML by default).");
    println!("  help       Show this help");
    println!("  version    Show version");
}

/// Print the version line.
pub fn print_version() {
    println!("lorenzviz v{}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults_writes_html() {
        let dir = std::env::temp_dir().join("lorenzviz-cli-html");
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("out.html");

        let written = run_inner(None, Some(out.clone()), false).unwrap();
        assert_eq!(written, out);

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("Plotly.newPlot"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_run_json_output() {
        let dir = std::env::temp_dir().join("lorenzviz-cli-json");
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("out.json");

        run_inner(None, Some(out.clone()), true).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let figure: crate::figure::Figure = serde_json::from_str(&content).unwrap();
        assert_eq!(figure.frames.len(), 201);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = std::env::temp_dir().join("lorenzviz-cli-config");
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config.yaml");
        let out = dir.join("out.json");

        std::fs::write(&config_path, "integration:\n  steps: 100\n  stride: 10\n").unwrap();

        run_inner(Some(&config_path), Some(out.clone()), true).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let figure: crate::figure::Figure = serde_json::from_str(&content).unwrap();
        assert_eq!(figure.frames.len(), 11);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_run_missing_config_fails() {
        let result = run_inner(Some(Path::new("/nonexistent/config.yaml")), None, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_invalid_config_fails() {
        let dir = std::env::temp_dir().join("lorenzviz-cli-bad-config");
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("bad.yaml");
        std::fs::write(&config_path, "system:\n  rho: 0.5\n").unwrap();

        let result = run_inner(Some(&config_path), Some(dir.join("out.html")), false);
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_run_cli_help_and_version() {
        // Smoke: dispatch paths that only print.
        let _ = run_cli(Args {
            command: Command::Help,
        });
        let _ = run_cli(Args {
            command: Command::Version,
        });
    }
}
