//! Van Picker Library
//!
//! This library provides the core of the Van Picker booking wizard: the rental
//! catalog model, the shared form record, image asset resolution, the
//! terminal wizard and its steps, and the CLI command handlers.

/// Application orchestration (terminal loop, result output)
pub mod app;
/// Image asset resolution with placeholder fallback
pub mod assets;
/// CLI command handlers
pub mod cli;
/// Persistent configuration
pub mod config;
/// Application-wide constants
pub mod constants;
/// Tracing subscriber setup
pub mod logging;
/// Catalog and form data models
pub mod models;
/// Terminal user interface
pub mod tui;
