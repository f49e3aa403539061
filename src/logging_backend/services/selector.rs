//! Selection of the logging backend for an application.
//!
//! [`BackendSelector`] is the single entry point for callers. It asks a
//! [`SelectionPolicy`] which variant to activate and performs that variant's
//! setup, so the returned [`SelectedBackend`] is ready to use.

use super::{BackendKind, ConfiguratorResolver, ResolveError, SelectorConfig};
use crate::logging_backend::{
    adapters::{LogbackBackend, NoopBackend, SyntheticBackend},
    domain::{
        Application, BridgeEndpoint, LoggerDescriptor, LoggerLevel, ManagementObjectName,
        ObjectNamePattern,
    },
    ports::{LoggingBackend, LoggingBackendResult, ManagementBridge},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while selecting a backend.
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    /// The Logback configurator MBean could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Result type for backend selection.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Decides which backend variant serves an application.
pub trait SelectionPolicy: Send + Sync {
    /// Returns the variant to activate for `application`.
    fn choose(&self, application: &Application) -> BackendKind;
}

/// Policy activating the same variant for every application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPolicy(BackendKind);

impl FixedPolicy {
    /// Creates a policy always choosing `kind`.
    #[must_use]
    pub const fn new(kind: BackendKind) -> Self {
        Self(kind)
    }
}

impl SelectionPolicy for FixedPolicy {
    fn choose(&self, _application: &Application) -> BackendKind {
        self.0
    }
}

/// A ready-to-use logging backend of one of the supported variants.
#[derive(Debug)]
pub enum SelectedBackend<B>
where
    B: ManagementBridge,
{
    /// Bound to a resolved Logback configurator MBean.
    Logback(LogbackBackend<B>),
    /// No integration.
    Noop(NoopBackend),
    /// Fixed demonstration dataset.
    Synthetic(SyntheticBackend),
}

impl<B> SelectedBackend<B>
where
    B: ManagementBridge,
{
    /// Returns the active variant.
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Logback(_) => BackendKind::Logback,
            Self::Noop(_) => BackendKind::Noop,
            Self::Synthetic(_) => BackendKind::Synthetic,
        }
    }

    fn as_backend(&self) -> &dyn LoggingBackend {
        match self {
            Self::Logback(backend) => backend,
            Self::Noop(backend) => backend,
            Self::Synthetic(backend) => backend,
        }
    }
}

#[async_trait]
impl<B> LoggingBackend for SelectedBackend<B>
where
    B: ManagementBridge,
{
    async fn logger_names(&self) -> LoggingBackendResult<Vec<String>> {
        self.as_backend().logger_names().await
    }

    async fn effective_levels(
        &self,
        loggers: &[LoggerDescriptor],
    ) -> LoggingBackendResult<Vec<LoggerLevel>> {
        self.as_backend().effective_levels(loggers).await
    }

    async fn set_level(&self, logger: &str, level: &str) -> LoggingBackendResult<()> {
        self.as_backend().set_level(logger, level).await
    }

    fn object_name(&self) -> Option<&ManagementObjectName> {
        self.as_backend().object_name()
    }
}

/// Entry point choosing and preparing the logging backend of an
/// application.
pub struct BackendSelector<B, P = FixedPolicy>
where
    B: ManagementBridge,
    P: SelectionPolicy,
{
    bridge: Arc<B>,
    resolver: ConfiguratorResolver<B>,
    policy: P,
}

impl<B> BackendSelector<B, FixedPolicy>
where
    B: ManagementBridge,
{
    /// Creates a selector activating the configured variant for every
    /// application.
    #[must_use]
    pub fn new(bridge: Arc<B>, config: &SelectorConfig) -> Self {
        Self::with_policy(
            bridge,
            config.configurator_pattern.clone(),
            FixedPolicy::new(config.backend),
        )
    }
}

impl<B, P> BackendSelector<B, P>
where
    B: ManagementBridge,
    P: SelectionPolicy,
{
    /// Creates a selector delegating the choice to `policy`.
    ///
    /// `pattern` is the search used when the policy picks Logback; pass
    /// [`ObjectNamePattern::logback_configurator`] or a configured
    /// [`SelectorConfig::configurator_pattern`].
    #[must_use]
    pub fn with_policy(bridge: Arc<B>, pattern: ObjectNamePattern, policy: P) -> Self {
        let resolver = ConfiguratorResolver::with_pattern(Arc::clone(&bridge), pattern);
        Self {
            bridge,
            resolver,
            policy,
        }
    }

    /// Selects and prepares the backend for `application`.
    ///
    /// Only the Logback variant performs remote calls here, to resolve its
    /// configurator MBean.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Resolve`] when the Logback variant is chosen
    /// and its MBean cannot be resolved.
    pub async fn select(&self, application: &Application) -> SelectionResult<SelectedBackend<B>> {
        let kind = self.policy.choose(application);
        tracing::debug!(
            application = %application.id(),
            backend = %kind,
            "selecting logging backend"
        );
        let selected = match kind {
            BackendKind::Logback => {
                let mbean = self.resolver.resolve(application).await?;
                SelectedBackend::Logback(LogbackBackend::new(
                    Arc::clone(&self.bridge),
                    BridgeEndpoint::for_application(application),
                    mbean,
                ))
            }
            BackendKind::Noop => SelectedBackend::Noop(NoopBackend::new()),
            BackendKind::Synthetic => SelectedBackend::Synthetic(SyntheticBackend::new()),
        };
        Ok(selected)
    }
}
