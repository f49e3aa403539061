//! Resolution of an application's logging configurator MBean.
//!
//! A bridge search may return several configurators, one per logging
//! context. [`ConfiguratorResolver`] picks the one named after the
//! application, falling back to the `default` context, and refuses to guess
//! beyond that.

use crate::logging_backend::{
    domain::{Application, ApplicationId, BridgeEndpoint, ManagementObjectName, ObjectNamePattern},
    ports::{BridgeError, ManagementBridge},
};
use std::sync::Arc;
use thiserror::Error;

/// Object name property holding the logging context name.
const CONTEXT_NAME_PROPERTY: &str = "Name";

/// Context name used when the application does not name its own context.
const DEFAULT_CONTEXT_NAME: &str = "default";

/// Errors returned while resolving a configurator MBean.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The search matched no MBean.
    #[error("no logging configurator MBean found for application {application}")]
    NotFound {
        /// Application that was searched.
        application: ApplicationId,
    },

    /// Several MBeans matched and none is named after the application or
    /// `default`.
    #[error(
        "ambiguous logging configurator MBeans for application {application}: {}",
        join_names(.candidates)
    )]
    Ambiguous {
        /// Application that was searched.
        application: ApplicationId,
        /// Every candidate returned by the search, in search order.
        candidates: Vec<ManagementObjectName>,
    },

    /// The search call failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Result type for configurator resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Locates the configurator MBean of an application.
pub struct ConfiguratorResolver<B>
where
    B: ManagementBridge,
{
    bridge: Arc<B>,
    pattern: ObjectNamePattern,
}

impl<B> ConfiguratorResolver<B>
where
    B: ManagementBridge,
{
    /// Creates a resolver searching for Logback `JMXConfigurator` MBeans.
    #[must_use]
    pub fn new(bridge: Arc<B>) -> Self {
        Self::with_pattern(bridge, ObjectNamePattern::logback_configurator())
    }

    /// Creates a resolver searching with a custom pattern.
    ///
    /// Disambiguation still reads the `Name` property of each candidate.
    #[must_use]
    pub const fn with_pattern(bridge: Arc<B>, pattern: ObjectNamePattern) -> Self {
        Self { bridge, pattern }
    }

    /// Returns the search pattern.
    #[must_use]
    pub const fn pattern(&self) -> &ObjectNamePattern {
        &self.pattern
    }

    /// Resolves the configurator MBean for `application`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when nothing matches,
    /// [`ResolveError::Ambiguous`] when several candidates match and none can
    /// be chosen, or [`ResolveError::Bridge`] when the search fails.
    pub async fn resolve(&self, application: &Application) -> ResolveResult<ManagementObjectName> {
        let endpoint = BridgeEndpoint::for_application(application);
        let candidates = self.bridge.search(&endpoint, &self.pattern).await?;
        tracing::debug!(
            application = %application.id(),
            pattern = %self.pattern,
            candidates = candidates.len(),
            "searched for logging configurator"
        );
        let chosen = disambiguate(application, candidates)?;
        tracing::debug!(
            application = %application.id(),
            mbean = %chosen,
            "resolved logging configurator"
        );
        Ok(chosen)
    }
}

/// Picks one candidate: the sole one, else the one named after the
/// application, else the `default` one.
pub(crate) fn disambiguate(
    application: &Application,
    candidates: Vec<ManagementObjectName>,
) -> ResolveResult<ManagementObjectName> {
    if candidates.len() <= 1 {
        return candidates
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NotFound {
                application: application.id().clone(),
            });
    }

    let chosen = find_by_context_name(&candidates, application.name().as_str())
        .or_else(|| find_by_context_name(&candidates, DEFAULT_CONTEXT_NAME))
        .cloned();

    chosen.ok_or_else(|| ResolveError::Ambiguous {
        application: application.id().clone(),
        candidates,
    })
}

fn find_by_context_name<'a>(
    candidates: &'a [ManagementObjectName],
    context_name: &str,
) -> Option<&'a ManagementObjectName> {
    candidates.iter().find(|candidate| {
        candidate
            .property(CONTEXT_NAME_PROPERTY)
            .is_some_and(|value| value.eq_ignore_ascii_case(context_name))
    })
}

fn join_names(names: &[ManagementObjectName]) -> String {
    names
        .iter()
        .map(ManagementObjectName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
