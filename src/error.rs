//! Error types for the OpenTrainer client
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for OpenTrainer operations
///
/// This enum encompasses all possible errors that can occur while loading
/// configuration, talking to the remote API, and validating form input.
/// Any non-success API response collapses into [`OpenTrainerError::Api`];
/// there is no distinct not-found or conflict variant.
#[derive(Error, Debug)]
pub enum OpenTrainerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote API errors (transport failures and non-success responses)
    #[error("API error: {0}")]
    Api(String),

    /// Local form validation errors, raised before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors (config file reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors (config file contents)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for OpenTrainer operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
