//! Known logging levels.

use super::ParseLogLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logging verbosity understood by the supported frameworks.
///
/// Levels travel as plain strings between callers and the bridge; this enum
/// exists for callers that want to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Finest-grained tracing output.
    Trace,
    /// Diagnostic output.
    Debug,
    /// Informational output.
    Info,
    /// Potential problems.
    Warn,
    /// Failures.
    Error,
    /// Logging disabled.
    Off,
}

impl LogLevel {
    /// All levels, most verbose first.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Off,
    ];

    /// Returns the canonical upper-case representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| ParseLogLevelError(value.to_owned()))
    }
}
