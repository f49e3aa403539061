//! Configuration of the backend selection policy.

use crate::logging_backend::domain::ObjectNamePattern;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logging backend variants the selector can activate.
///
/// Configuration values are read through [`FromStr`], so they are
/// case-insensitive wherever they come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BackendKind {
    /// Live Logback introspection through a resolved configurator MBean.
    Logback,
    /// No integration: empty listings, accepted changes.
    #[default]
    Noop,
    /// Fixed demonstration dataset.
    Synthetic,
}

impl BackendKind {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logback => "logback",
            Self::Noop => "noop",
            Self::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ParseBackendKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "logback" => Ok(Self::Logback),
            "noop" => Ok(Self::Noop),
            "synthetic" => Ok(Self::Synthetic),
            _ => Err(ParseBackendKindError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for BackendKind {
    type Error = ParseBackendKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BackendKind> for String {
    fn from(value: BackendKind) -> Self {
        value.as_str().to_owned()
    }
}

/// Error returned while parsing a backend kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown logging backend kind: {0}")]
pub struct ParseBackendKindError(pub String);

/// Errors returned while loading selector configuration.
#[derive(Debug, Error)]
pub enum SelectorConfigError {
    /// The configuration document is not valid TOML or does not describe a
    /// selector.
    #[error("invalid selector configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration for [`BackendSelector`](super::BackendSelector).
///
/// # Examples
///
/// ```
/// use logctl::logging_backend::services::{BackendKind, SelectorConfig};
///
/// let config = SelectorConfig::default();
/// assert_eq!(config.backend, BackendKind::Noop);
///
/// let live = SelectorConfig::from_toml_str("[logging]\nbackend = \"logback\"\n")
///     .expect("valid configuration");
/// assert_eq!(live.backend, BackendKind::Logback);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Backend activated for every application.
    pub backend: BackendKind,
    /// Search pattern for configurator MBeans, used by the Logback backend.
    pub configurator_pattern: ObjectNamePattern,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            configurator_pattern: ObjectNamePattern::logback_configurator(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigDocument {
    logging: SelectorConfig,
}

impl SelectorConfig {
    /// Configuration activating live Logback introspection.
    #[must_use]
    pub fn live() -> Self {
        Self {
            backend: BackendKind::Logback,
            ..Self::default()
        }
    }

    /// Configuration activating the demonstration dataset.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            backend: BackendKind::Synthetic,
            ..Self::default()
        }
    }

    /// Reads the `[logging]` table of a TOML document.
    ///
    /// A missing table or key keeps the default.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorConfigError::Toml`] when the document is malformed,
    /// names an unknown backend, or carries unknown keys in the `[logging]`
    /// table.
    pub fn from_toml_str(document: &str) -> Result<Self, SelectorConfigError> {
        let parsed: ConfigDocument = toml::from_str(document)?;
        Ok(parsed.logging)
    }
}
