//! Input/output: command line, progress display, configuration and errors

/// Command-line front end
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Search progress display
pub mod progress;
