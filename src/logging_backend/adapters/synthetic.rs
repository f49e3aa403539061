//! Canned logging backend for demonstrations.

use crate::logging_backend::{
    domain::{LogLevel, LoggerDescriptor, LoggerLevel, ManagementObjectName},
    ports::{LoggingBackend, LoggingBackendResult},
};
use async_trait::async_trait;

/// Six loggers named `"1"` to `"6"`, one per known level.
const DATASET: [(&str, LogLevel); 6] = [
    ("1", LogLevel::Trace),
    ("2", LogLevel::Debug),
    ("3", LogLevel::Info),
    ("4", LogLevel::Warn),
    ("5", LogLevel::Error),
    ("6", LogLevel::Off),
];

/// Backend returning a fixed dataset without a live target.
///
/// Level changes are accepted and discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyntheticBackend;

impl SyntheticBackend {
    /// Creates a synthetic backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoggingBackend for SyntheticBackend {
    async fn logger_names(&self) -> LoggingBackendResult<Vec<String>> {
        Ok(DATASET.iter().map(|(name, _)| (*name).to_owned()).collect())
    }

    /// Returns the whole dataset regardless of `loggers`.
    async fn effective_levels(
        &self,
        _loggers: &[LoggerDescriptor],
    ) -> LoggingBackendResult<Vec<LoggerLevel>> {
        Ok(DATASET.into_iter().map(LoggerLevel::from).collect())
    }

    async fn set_level(&self, _logger: &str, _level: &str) -> LoggingBackendResult<()> {
        Ok(())
    }

    fn object_name(&self) -> Option<&ManagementObjectName> {
        None
    }
}
