//! Logging backend for frameworks without an integration.

use crate::logging_backend::{
    domain::{LoggerDescriptor, LoggerLevel, ManagementObjectName},
    ports::{LoggingBackend, LoggingBackendResult},
};
use async_trait::async_trait;

/// Backend that reports no loggers and accepts every change.
///
/// Stands in for frameworks that cannot be introspected yet (Log4j2), so
/// callers keep a uniform contract. It holds no bridge and never issues a
/// remote call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopBackend;

impl NoopBackend {
    /// Creates a no-op backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoggingBackend for NoopBackend {
    async fn logger_names(&self) -> LoggingBackendResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn effective_levels(
        &self,
        _loggers: &[LoggerDescriptor],
    ) -> LoggingBackendResult<Vec<LoggerLevel>> {
        Ok(Vec::new())
    }

    async fn set_level(&self, _logger: &str, _level: &str) -> LoggingBackendResult<()> {
        Ok(())
    }

    fn object_name(&self) -> Option<&ManagementObjectName> {
        None
    }
}
