//! Error types for sagectl.
//!
//! This module defines the error types used throughout sagectl, covering
//! client-side validation, service failures reported by SageMaker, and
//! local configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sagectl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for sagectl.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A required parameter was not supplied.
    #[error("Missing required parameter '{parameter}' for {operation}")]
    MissingParameter {
        /// API operation name
        operation: &'static str,
        /// Parameter name as the service knows it
        parameter: &'static str,
    },

    /// A parameter value could not be used.
    #[error("Invalid value for parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// The output selector could not be parsed or resolved.
    #[error("Invalid output selector '{selector}': {message}")]
    InvalidSelector {
        /// Selector as written by the user
        selector: String,
        /// Error message
        message: String,
    },

    // ========================================================================
    // Service Errors
    // ========================================================================
    /// SageMaker rejected the request.
    #[error("{operation} failed: {message}{}", code_suffix(.code))]
    Service {
        /// API operation name
        operation: &'static str,
        /// AWS error code, e.g. `ResourceNotFound`
        code: Option<String>,
        /// Error message
        message: String,
    },

    /// The service endpoint host name could not be resolved.
    #[error(
        "{operation} failed: name resolution failure attempting to reach the SageMaker \
         endpoint '{endpoint}' in region '{region}'. Check the region (from --region, \
         SAGECTL_REGION or the AWS profile) and your network or DNS configuration: {message}"
    )]
    NameResolution {
        /// API operation name
        operation: &'static str,
        /// Region the client was configured for
        region: String,
        /// Endpoint that failed to resolve
        endpoint: String,
        /// Underlying error message
        message: String,
    },

    /// The request could not be dispatched or the response could not be read.
    #[error("{operation} failed: {message}")]
    Transport {
        /// API operation name
        operation: &'static str,
        /// Error message
        message: String,
    },

    /// The call did not complete within the configured timeout.
    #[error("{operation} timed out: {message}")]
    Timeout {
        /// API operation name
        operation: &'static str,
        /// Error message
        message: String,
    },

    /// The in-flight call was cancelled by the user.
    #[error("{0} was cancelled")]
    Cancelled(&'static str),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read or parsed.
    #[error("Failed to load configuration from '{path}': {message}")]
    ConfigFile {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    // ========================================================================
    // IO and Serialization Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" ({c})"))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new invalid parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Creates a new invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Creates a new service error.
    pub fn service(
        operation: &'static str,
        code: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Service {
            operation,
            code,
            message: message.into(),
        }
    }

    /// Creates a new transport error.
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Returns the AWS error code for service errors.
    pub fn service_code(&self) -> Option<&str> {
        match self {
            Error::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingParameter { .. }
            | Error::InvalidParameter { .. }
            | Error::InvalidSelector { .. } => 2,
            Error::Service { .. } => 3,
            Error::NameResolution { .. } | Error::Transport { .. } | Error::Timeout { .. } => 4,
            Error::Cancelled(_) => 130,
            _ => 1,
        }
    }
}
