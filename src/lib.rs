// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod task;
pub mod types;

use anyhow::Result;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::config::{load_and_validate, resolve_tasks_path, TASKS_ENV_VAR};
use crate::report::Report;

pub use crate::task::{Task, TaskId};

/// High-level entry point used by `main.rs`.
///
/// Loads the snapshot, narrows it to the working set and prints the
/// requested view to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let tasks_path = resolve_tasks_path(args.tasks.clone(), std::env::var_os(TASKS_ENV_VAR));
    let file = load_and_validate(&tasks_path)?;
    info!(
        path = %tasks_path.display(),
        tasks = file.tasks().len(),
        "task snapshot loaded"
    );

    let mut report = Report::new(&file, args.project.as_deref());
    if let Some(scope) = args.blocking_scope {
        report = report.with_blocking_scope(scope);
    }
    let output = render(&report, &args.command)?;
    println!("{output}");
    Ok(())
}

/// Render one subcommand's view.
pub fn render(report: &Report<'_>, command: &Command) -> errors::Result<String> {
    let output = match command {
        Command::Stats => report.render_stats(),
        Command::Levels => report.render_levels(),
        Command::Level { id } => report.render_level(id)?,
        Command::Chains => report.render_chains(),
        Command::CriticalPath => report.render_critical_path(),
        Command::Blocked => report.render_blocked(),
        Command::Check => report.render_check(),
    };
    Ok(output)
}
