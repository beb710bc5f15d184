// src/config/mod.rs

//! Task snapshot loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a snapshot from disk (`loader.rs`).
//! - Validate id invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str, resolve_tasks_path, TASKS_ENV_VAR};
pub use model::{ConfigSection, RawTaskFile, TaskFile};
