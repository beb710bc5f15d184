// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Only snapshot loading and the CLI can fail; the graph engine itself never
//! returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskDepsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskDepsError>;
