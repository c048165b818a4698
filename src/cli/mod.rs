//! CLI command handlers for vanpick.
//!
//! `run` starts the interactive wizard. The other commands are headless and
//! scriptable, printing either human-readable text or JSON.

pub mod catalog;
pub mod common;
pub mod config;
pub mod run;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use run::RunArgs;
