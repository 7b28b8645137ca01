//! Interactive generator for CMake-based C/C++ projects.
//!
//! The pipeline is strictly staged: answers are collected (interactively or
//! from a YAML file), resolved into an immutable [`config::ProjectConfig`],
//! planned into a complete in-memory file tree, previewed, and only then
//! written to disk.

pub mod config;
pub mod emit;
pub mod error;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;
