//! Input/output: command line, settings files, output files, and errors

/// Command-line arguments and option resolution
pub mod cli;
/// Default values and fixed limits
pub mod configuration;
/// Settings dump written beside outputs
pub mod dump;
/// Error types and the error log
pub mod error;
/// Output naming and export
pub mod image;
/// Progress display
pub mod progress;
/// Settings file reader
pub mod settings;
/// Pre-flight option checks
pub mod validation;
