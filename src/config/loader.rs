// src/config/loader.rs

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::Result;

/// Environment variable naming the snapshot when `--tasks` is absent.
pub const TASKS_ENV_VAR: &str = "TASKDEPS_TASKS";

/// Snapshot file used when neither `--tasks` nor `TASKDEPS_TASKS` is set.
pub const DEFAULT_TASKS_FILE: &str = "tasks.toml";

/// Load a snapshot from a given path and return the raw `RawTaskFile`.
///
/// This only performs TOML deserialization; it does **not** check ids. Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse snapshot TOML that is already in memory.
pub fn parse_str(contents: &str) -> Result<RawTaskFile> {
    let raw: RawTaskFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a snapshot from path and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects blank and duplicate task ids.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskFile> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let file = TaskFile::try_from(raw)?;
    debug!(
        path = %path.display(),
        tasks = file.tasks().len(),
        blocking_scope = ?file.config().blocking_scope,
        "loaded task snapshot"
    );
    Ok(file)
}

/// Pick the snapshot path: the CLI value, then the environment value, then
/// `tasks.toml`. An empty environment value counts as unset.
pub fn resolve_tasks_path(cli: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = cli {
        return path;
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_TASKS_FILE),
    }
}
