//! Logging backend driving a Logback `JMXConfigurator` MBean.

use crate::logging_backend::{
    domain::{BridgeEndpoint, LoggerDescriptor, LoggerLevel, ManagementObjectName},
    ports::{
        ExecRequest, ExecResponse, LoggingBackend, LoggingBackendError, LoggingBackendResult,
        ManagementBridge,
    },
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

const LOGGER_LIST_ATTRIBUTE: &str = "LoggerList";
const GET_EFFECTIVE_LEVEL: &str = "getLoggerEffectiveLevel";
const SET_LEVEL: &str = "setLoggerLevel";

/// Logback backend bound to one resolved configurator MBean.
///
/// Obtain one through
/// [`BackendSelector`](crate::logging_backend::services::BackendSelector);
/// the bound object name never changes.
pub struct LogbackBackend<B>
where
    B: ManagementBridge,
{
    bridge: Arc<B>,
    endpoint: BridgeEndpoint,
    mbean: ManagementObjectName,
}

impl<B> LogbackBackend<B>
where
    B: ManagementBridge,
{
    /// Binds a backend to a resolved configurator MBean.
    #[must_use]
    pub const fn new(
        bridge: Arc<B>,
        endpoint: BridgeEndpoint,
        mbean: ManagementObjectName,
    ) -> Self {
        Self {
            bridge,
            endpoint,
            mbean,
        }
    }

    /// Returns the bound configurator MBean.
    #[must_use]
    pub const fn mbean(&self) -> &ManagementObjectName {
        &self.mbean
    }

    fn effective_level_request(&self, logger: &LoggerDescriptor) -> ExecRequest {
        ExecRequest::new(
            self.mbean.clone(),
            GET_EFFECTIVE_LEVEL,
            vec![Value::String(logger.name().to_owned())],
        )
    }
}

impl<B> std::fmt::Debug for LogbackBackend<B>
where
    B: ManagementBridge,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogbackBackend")
            .field("endpoint", &self.endpoint)
            .field("mbean", &self.mbean)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<B> LoggingBackend for LogbackBackend<B>
where
    B: ManagementBridge,
{
    async fn logger_names(&self) -> LoggingBackendResult<Vec<String>> {
        let value = self
            .bridge
            .read_attr(&self.endpoint, &self.mbean, LOGGER_LIST_ATTRIBUTE)
            .await?;
        let Value::Array(entries) = value else {
            return Err(LoggingBackendError::MalformedResponse(format!(
                "{LOGGER_LIST_ATTRIBUTE} is not a list: {value}"
            )));
        };
        entries
            .into_iter()
            .map(|entry| match entry {
                Value::String(name) => Ok(name),
                other => Err(LoggingBackendError::MalformedResponse(format!(
                    "{LOGGER_LIST_ATTRIBUTE} entry is not a string: {other}"
                ))),
            })
            .collect()
    }

    async fn effective_levels(
        &self,
        loggers: &[LoggerDescriptor],
    ) -> LoggingBackendResult<Vec<LoggerLevel>> {
        let requests = loggers
            .iter()
            .map(|logger| self.effective_level_request(logger))
            .collect();
        let responses = self.bridge.bulk_request(&self.endpoint, requests).await?;

        let mut outstanding: HashMap<&str, usize> = HashMap::new();
        for logger in loggers {
            *outstanding.entry(logger.name()).or_default() += 1;
        }
        let levels = responses
            .iter()
            .map(|response| correlate(response, &mut outstanding))
            .collect::<LoggingBackendResult<Vec<_>>>()?;

        let mut unanswered: Vec<&str> = outstanding
            .into_iter()
            .filter(|(_, remaining)| *remaining > 0)
            .map(|(name, _)| name)
            .collect();
        if !unanswered.is_empty() {
            unanswered.sort_unstable();
            return Err(LoggingBackendError::UncorrelatedResponse(format!(
                "no answer for {}",
                unanswered.join(", ")
            )));
        }
        Ok(levels)
    }

    async fn set_level(&self, logger: &str, level: &str) -> LoggingBackendResult<()> {
        self.bridge
            .exec(
                &self.endpoint,
                &self.mbean,
                SET_LEVEL,
                vec![
                    Value::String(logger.to_owned()),
                    Value::String(level.to_owned()),
                ],
            )
            .await?;
        Ok(())
    }

    fn object_name(&self) -> Option<&ManagementObjectName> {
        Some(&self.mbean)
    }
}

/// Attributes a bulk answer to the logger named in its echoed arguments.
///
/// Each answer consumes one outstanding request for that logger.
fn correlate(
    response: &ExecResponse,
    outstanding: &mut HashMap<&str, usize>,
) -> LoggingBackendResult<LoggerLevel> {
    let name = response
        .request()
        .arguments()
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| {
            LoggingBackendError::UncorrelatedResponse(format!(
                "missing logger argument in echoed request: {:?}",
                response.request().arguments()
            ))
        })?;
    match outstanding.get_mut(name) {
        Some(remaining) if *remaining > 0 => *remaining -= 1,
        _ => return Err(LoggingBackendError::UncorrelatedResponse(name.to_owned())),
    }
    let level = response.value().as_str().ok_or_else(|| {
        LoggingBackendError::MalformedResponse(format!(
            "effective level of '{name}' is not a string: {}",
            response.value()
        ))
    })?;
    Ok(LoggerLevel::new(name, level))
}
