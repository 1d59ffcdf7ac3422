//! Error types for reftab-extract
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every failure maps to one of the two process exit codes: configuration
//! problems exit with 1, everything that fails after configuration exits
//! with 2.

use thiserror::Error;

/// The main error type for reftab-extract
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors (exit code 1)
    // ============================================================================
    #[error("Missing required environment variable: {name}")]
    MissingEnvVar { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Fetch / Output Errors (exit code 2)
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnvVar { name: name.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingEnvVar { .. } | Error::Config { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias for reftab-extract
pub type Result<T> = std::result::Result<T, Error>;
