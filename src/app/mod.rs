//! Application orchestration layer
//!
//! This module provides high-level orchestration functions that coordinate
//! between different parts of the application (TUI, config, catalog loading)
//! without containing detailed implementation logic.

/// Booking wizard terminal loop and result output
pub mod wizard;

// Re-export commonly used functions for convenience
pub use wizard::{run_booking_wizard_terminal, write_form};
