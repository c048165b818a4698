//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and environment variable names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Van Picker";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "vanpick";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "VanPicker";

/// Overrides the config directory (used by tests and packaging).
pub const CONFIG_DIR_ENV: &str = "VANPICK_CONFIG_DIR";

/// Overrides `assets.backend_url` from the config file.
pub const BACKEND_URL_ENV: &str = "VANPICK_BACKEND_URL";

/// Image shown when a model has no image or its image fails to load.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=500";

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "vanpick.log";
