//! Structured management object names.
//!
//! Object names follow `<domain>:<key>=<value>[,<key>=<value>...]`. The raw
//! string is kept verbatim because it is what the bridge expects back and
//! what diagnostics display; the parsed form is used for property lookups.

use super::LoggingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const WILDCARD: &str = "*";

/// Domain of the Logback JMX configurator MBean.
const LOGBACK_DOMAIN: &str = "ch.qos.logback.classic";

/// Type property value of the Logback JMX configurator MBean.
const LOGBACK_CONFIGURATOR_TYPE: &str = "ch.qos.logback.classic.jmx.JMXConfigurator";

/// Identifier of a remote management object (MBean).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ManagementObjectName {
    raw: String,
    domain: String,
    properties: Vec<(String, String)>,
}

impl ManagementObjectName {
    /// Parses an object name.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingDomainError::InvalidObjectName`] when the domain
    /// separator is missing, the domain or property list is empty, or a
    /// property is not a non-empty `key=value` pair.
    pub fn parse(value: impl Into<String>) -> Result<Self, LoggingDomainError> {
        let raw = value.into();
        let (domain, properties) = split_name(&raw, false)?;
        Ok(Self {
            domain,
            properties,
            raw,
        })
    }

    /// Returns the object name exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the domain part before the `:` separator.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the key properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// Looks up a key property. Keys are case-sensitive.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }
}

impl TryFrom<String> for ManagementObjectName {
    type Error = LoggingDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ManagementObjectName> for String {
    fn from(value: ManagementObjectName) -> Self {
        value.raw
    }
}

impl AsRef<str> for ManagementObjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ManagementObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Search pattern for management objects.
///
/// A property value of `*` matches any value. A trailing `*` entry in the
/// property list allows candidates to carry additional properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectNamePattern {
    raw: String,
    domain: String,
    properties: Vec<(String, String)>,
    open_property_list: bool,
}

impl ObjectNamePattern {
    /// Parses a search pattern.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingDomainError::InvalidObjectName`] under the same
    /// conditions as [`ManagementObjectName::parse`].
    pub fn parse(value: impl Into<String>) -> Result<Self, LoggingDomainError> {
        let raw = value.into();
        let (domain, mut properties) = split_name(&raw, true)?;
        let open_property_list = properties.iter().any(|(key, _)| key == WILDCARD);
        properties.retain(|(key, _)| key != WILDCARD);
        Ok(Self {
            domain,
            properties,
            open_property_list,
            raw,
        })
    }

    /// Pattern matching every Logback `JMXConfigurator` MBean regardless of
    /// its context name.
    #[must_use]
    pub fn logback_configurator() -> Self {
        Self {
            raw: format!("{LOGBACK_DOMAIN}:Name={WILDCARD},Type={LOGBACK_CONFIGURATOR_TYPE}"),
            domain: LOGBACK_DOMAIN.to_owned(),
            properties: vec![
                ("Name".to_owned(), WILDCARD.to_owned()),
                ("Type".to_owned(), LOGBACK_CONFIGURATOR_TYPE.to_owned()),
            ],
            open_property_list: false,
        }
    }

    /// Returns the pattern exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` when `name` is selected by this pattern.
    #[must_use]
    pub fn matches(&self, name: &ManagementObjectName) -> bool {
        if self.domain != name.domain() {
            return false;
        }
        if !self.open_property_list && self.properties.len() != name.properties().len() {
            return false;
        }
        self.properties.iter().all(|(key, expected)| {
            name.property(key)
                .is_some_and(|actual| expected == WILDCARD || expected == actual)
        })
    }
}

impl TryFrom<String> for ObjectNamePattern {
    type Error = LoggingDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ObjectNamePattern> for String {
    fn from(value: ObjectNamePattern) -> Self {
        value.raw
    }
}

impl fmt::Display for ObjectNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

type SplitName = (String, Vec<(String, String)>);

fn split_name(raw: &str, allow_list_wildcard: bool) -> Result<SplitName, LoggingDomainError> {
    let invalid = |reason| LoggingDomainError::InvalidObjectName {
        name: raw.to_owned(),
        reason,
    };

    let (domain, property_list) = raw
        .split_once(':')
        .ok_or_else(|| invalid("missing ':' domain separator"))?;
    if domain.is_empty() {
        return Err(invalid("empty domain"));
    }
    if property_list.is_empty() {
        return Err(invalid("empty property list"));
    }

    let properties = split_properties(property_list)
        .map_err(invalid)?
        .into_iter()
        .map(|entry| {
            if allow_list_wildcard && entry == WILDCARD {
                return Ok((WILDCARD.to_owned(), String::new()));
            }
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| invalid("property without '='"))?;
            if key.is_empty() {
                return Err(invalid("empty property key"));
            }
            Ok((key.to_owned(), value.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((domain.to_owned(), properties))
}

/// Splits a property list on commas that sit outside quoted values.
///
/// Quoted values may contain `,`, `=` and `:`; a backslash escapes the next
/// character inside quotes.
fn split_properties(list: &str) -> Result<Vec<&str>, &'static str> {
    let mut quoted = false;
    let mut escaped = false;
    let entries = list
        .split(|character: char| {
            if escaped {
                escaped = false;
                return false;
            }
            match character {
                '\\' if quoted => escaped = true,
                '"' => quoted = !quoted,
                ',' => return !quoted,
                _ => {}
            }
            false
        })
        .collect();
    if quoted {
        return Err("unterminated quoted value");
    }
    Ok(entries)
}
