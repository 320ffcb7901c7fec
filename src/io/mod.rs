//! Input/output operations, configuration and error handling
//!
//! This module contains the ambient surface around the core engine:
//! - Command-line interface and run driver
//! - Runtime constants
//! - Error types
//! - PNG loading, resizing and export
//! - Progress reporting
//! - Frame capture and GIF export

/// Command-line interface and run driver
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for all engine operations
pub mod error;
/// PNG loading, bitmap conversion and export
pub mod image;
/// Frame-loop progress reporting
pub mod progress;
/// Frame capture and animated GIF export
pub mod visualization;
