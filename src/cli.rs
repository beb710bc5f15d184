// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::BlockingScope;

/// Command-line arguments for `taskdeps`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdeps",
    version,
    about = "Analyse \"waits for\" dependencies in a task snapshot.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task snapshot (TOML).
    ///
    /// Default: `TASKDEPS_TASKS` if set, otherwise `tasks.toml` in the
    /// current working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub tasks: Option<PathBuf>,

    /// Only analyse incomplete tasks of this project.
    #[arg(long, global = true, value_name = "ID")]
    pub project: Option<String>,

    /// Resolve readiness against the working set (`subset`) or the whole
    /// snapshot (`all`). Overrides `[config].blocking_scope`.
    #[arg(long, global = true, value_name = "SCOPE")]
    pub blocking_scope: Option<BlockingScope>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDEPS_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to print.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Total, with-dependencies, blocked and ready counts.
    Stats,
    /// Tasks grouped by dependency level.
    Levels,
    /// Level of a single task.
    Level {
        /// Task id.
        id: String,
    },
    /// The longest dependency chain from each root, longest first.
    Chains,
    /// The longest dependency chain.
    CriticalPath,
    /// Blocked tasks and what they are waiting on.
    Blocked,
    /// Dangling references, self references and cycles.
    Check,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
