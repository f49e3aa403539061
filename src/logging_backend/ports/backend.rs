//! Logging backend port exposed to callers.

use crate::logging_backend::domain::{LoggerDescriptor, LoggerLevel, ManagementObjectName};
use crate::logging_backend::ports::BridgeError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for logging backend operations.
pub type LoggingBackendResult<T> = Result<T, LoggingBackendError>;

/// Uniform log-level contract over a logging framework.
///
/// Implementations are bound to one application for their lifetime.
#[async_trait]
pub trait LoggingBackend: Send + Sync {
    /// Lists known logger names in the order reported by the framework.
    async fn logger_names(&self) -> LoggingBackendResult<Vec<String>>;

    /// Reads the effective level of each logger.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingBackendError::UncorrelatedResponse`] when an answer
    /// cannot be attributed to a requested logger.
    async fn effective_levels(
        &self,
        loggers: &[LoggerDescriptor],
    ) -> LoggingBackendResult<Vec<LoggerLevel>>;

    /// Sets the level of a logger. The level is not validated locally.
    async fn set_level(&self, logger: &str, level: &str) -> LoggingBackendResult<()>;

    /// Returns the management object this backend is bound to, if any.
    fn object_name(&self) -> Option<&ManagementObjectName>;
}

/// Errors returned by logging backend implementations.
#[derive(Debug, Clone, Error)]
pub enum LoggingBackendError {
    /// The underlying remote call failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// A batched answer echoed a logger that was not requested.
    #[error("response does not correlate with a requested logger: {0}")]
    UncorrelatedResponse(String),

    /// A remote value did not have the expected shape.
    #[error("malformed bridge response: {0}")]
    MalformedResponse(String),
}
