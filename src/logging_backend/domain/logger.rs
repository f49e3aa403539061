//! Logger descriptors and level pairs.

use super::LogLevel;
use serde::{Deserialize, Serialize};

/// Identifies a logger whose effective level should be queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoggerDescriptor {
    name: String,
}

impl LoggerDescriptor {
    /// Creates a descriptor for the named logger.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A logger together with its effective level.
///
/// The level is kept as reported by the remote side, which is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerLevel {
    name: String,
    level: String,
}

impl LoggerLevel {
    /// Creates a logger/level pair.
    #[must_use]
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }

    /// Returns the logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the level as reported.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Interprets the reported level, if it belongs to the known set.
    #[must_use]
    pub fn known_level(&self) -> Option<LogLevel> {
        self.level.parse().ok()
    }
}

impl From<(&str, LogLevel)> for LoggerLevel {
    fn from((name, level): (&str, LogLevel)) -> Self {
        Self::new(name, level.as_str())
    }
}
