//! CLI argument parsing.
//!
//! Hand-rolled parser extracted from main.rs so the parsing logic is
//! fully testable: it accepts any iterator of strings, not just
//! `std::env::args()`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build the figure and write it out.
    Run {
        /// Optional path to a configuration YAML file.
        config_path: Option<PathBuf>,
        /// Optional output path override.
        out: Option<PathBuf>,
        /// Write raw figure JSON instead of an HTML page.
        json: bool,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            // No command defaults to a plain run.
            return Self {
                command: Command::Run {
                    config_path: None,
                    out: None,
                    json: false,
                },
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(rest: &[String]) -> Command {
        let mut config_path = None;
        let mut out = None;
        let mut json = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--out" => {
                    if i + 1 < rest.len() {
                        out = Some(PathBuf::from(&rest[i + 1]));
                        i += 1;
                    } else {
                        eprintln!("--out requires a path argument");
                    }
                }
                "--json" => json = true,
                arg if config_path.is_none() && !arg.starts_with('-') => {
                    config_path = Some(PathBuf::from(arg));
                }
                unknown => {
                    eprintln!("Ignoring unknown run argument: {unknown}");
                }
            }
            i += 1;
        }

        Command::Run {
            config_path,
            out,
            json,
        }
    }
}
