//! Monitored application identity.

use super::LoggingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to an application by the registry.
///
/// The identifier scopes every bridge call to one application
/// (see [`super::BridgeEndpoint`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a validated application identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingDomainError::EmptyApplicationId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LoggingDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(LoggingDomainError::EmptyApplicationId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered application name, as reported by the application itself.
///
/// Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationName(String);

impl ApplicationName {
    /// Creates a validated application name.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingDomainError::EmptyApplicationName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LoggingDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(LoggingDomainError::EmptyApplicationName);
        }
        Ok(Self(normalized))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An application whose logging is being managed.
///
/// Supplied by the application registry and read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    name: ApplicationName,
}

impl Application {
    /// Creates an application from raw identifier and name values.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingDomainError::EmptyApplicationId`] or
    /// [`LoggingDomainError::EmptyApplicationName`] when the corresponding
    /// value is blank.
    pub fn new(
        raw_id: impl Into<String>,
        raw_name: impl Into<String>,
    ) -> Result<Self, LoggingDomainError> {
        Ok(Self {
            id: ApplicationId::new(raw_id)?,
            name: ApplicationName::new(raw_name)?,
        })
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> &ApplicationId {
        &self.id
    }

    /// Returns the application name.
    #[must_use]
    pub const fn name(&self) -> &ApplicationName {
        &self.name
    }
}
