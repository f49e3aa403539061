//! Bridge endpoint scoping remote calls to one application.

use super::Application;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative path of an application's management bridge,
/// `api/applications/<id>/jolokia/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BridgeEndpoint(String);

impl BridgeEndpoint {
    /// Builds the endpoint for an application.
    #[must_use]
    pub fn for_application(application: &Application) -> Self {
        Self(format!("api/applications/{}/jolokia/", application.id()))
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BridgeEndpoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BridgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
