//! Error types for logging domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing logging domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingDomainError {
    /// The application identifier is empty after trimming.
    #[error("application id must not be empty")]
    EmptyApplicationId,

    /// The application name is empty after trimming.
    #[error("application name must not be empty")]
    EmptyApplicationName,

    /// The management object name does not follow
    /// `<domain>:<key>=<value>[,<key>=<value>...]`.
    #[error("invalid management object name '{name}': {reason}")]
    InvalidObjectName {
        /// The rejected object name.
        name: String,
        /// Which part of the name is malformed.
        reason: &'static str,
    },
}

/// Error returned while parsing a log level outside the known set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLogLevelError(pub String);
