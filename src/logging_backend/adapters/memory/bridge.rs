//! In-memory management bridge for logging backend tests.

use crate::logging_backend::{
    domain::{BridgeEndpoint, ManagementObjectName, ObjectNamePattern},
    ports::{BridgeError, BridgeResult, ExecRequest, ExecResponse, ManagementBridge},
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

const ROOT_LOGGER: &str = "ROOT";
const LOGGER_LIST_ATTRIBUTE: &str = "LoggerList";
const DEFAULT_ROOT_LEVEL: &str = "DEBUG";

/// In-memory management bridge adapter.
///
/// Models a set of applications, each exposing Logback-style configurator
/// MBeans, without any network traffic. Effective levels are inherited
/// along dotted logger names up to `ROOT`. Every port call is counted, and
/// failures and response reordering can be injected.
#[derive(Debug, Clone, Default)]
pub struct InMemoryManagementBridge {
    state: Arc<RwLock<InMemoryBridgeState>>,
}

#[derive(Debug, Default)]
struct InMemoryBridgeState {
    endpoints: HashMap<BridgeEndpoint, Vec<RegisteredMbean>>,
    pending_failure: Option<BridgeError>,
    reverse_bulk_responses: bool,
    calls: usize,
}

#[derive(Debug)]
struct RegisteredMbean {
    name: ManagementObjectName,
    attributes: HashMap<String, Value>,
    loggers: Vec<String>,
    levels: HashMap<String, String>,
}

impl RegisteredMbean {
    fn new(name: ManagementObjectName) -> Self {
        Self {
            name,
            attributes: HashMap::new(),
            loggers: vec![ROOT_LOGGER.to_owned()],
            levels: HashMap::new(),
        }
    }

    fn touch_logger(&mut self, logger: &str) {
        if !self.loggers.iter().any(|known| known == logger) {
            self.loggers.push(logger.to_owned());
        }
    }

    fn effective_level(&self, logger: &str) -> String {
        let mut current = logger;
        loop {
            if let Some(level) = self.levels.get(current) {
                return level.clone();
            }
            match current.rsplit_once('.') {
                Some((parent, _)) => current = parent,
                None => break,
            }
        }
        self.levels
            .get(ROOT_LOGGER)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT_LEVEL.to_owned())
    }

    fn set_level(&mut self, logger: &str, level: Option<&str>) {
        self.touch_logger(logger);
        match level {
            Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case("null") => {
                self.levels.insert(logger.to_owned(), value.to_owned());
            }
            _ => {
                self.levels.remove(logger);
            }
        }
    }

    fn read_attr(&self, attribute: &str) -> BridgeResult<Value> {
        if attribute == LOGGER_LIST_ATTRIBUTE {
            return Ok(Value::from(self.loggers.clone()));
        }
        self.attributes.get(attribute).cloned().ok_or_else(|| {
            BridgeError::remote(404, format!("attribute not found: {attribute}"))
        })
    }

    fn exec(&mut self, operation: &str, arguments: &[Value]) -> BridgeResult<Value> {
        match (operation, arguments) {
            ("getLoggerEffectiveLevel", [Value::String(logger)]) => {
                Ok(Value::String(self.effective_level(logger)))
            }
            ("setLoggerLevel", [Value::String(logger), level]) => {
                self.set_level(logger, level.as_str());
                Ok(Value::Null)
            }
            ("getLoggerEffectiveLevel" | "setLoggerLevel", _) => Err(BridgeError::remote(
                400,
                format!("invalid arguments for {operation}: {arguments:?}"),
            )),
            _ => Err(BridgeError::remote(
                400,
                format!("operation not found: {operation}"),
            )),
        }
    }
}

impl InMemoryBridgeState {
    fn begin_call(&mut self) -> BridgeResult<()> {
        self.calls += 1;
        self.pending_failure.take().map_or(Ok(()), Err)
    }

    fn mbeans(&self, endpoint: &BridgeEndpoint) -> BridgeResult<&[RegisteredMbean]> {
        self.endpoints
            .get(endpoint)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_endpoint(endpoint))
    }

    fn mbean_mut(
        &mut self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
    ) -> BridgeResult<&mut RegisteredMbean> {
        self.endpoints
            .get_mut(endpoint)
            .ok_or_else(|| unknown_endpoint(endpoint))?
            .iter_mut()
            .find(|registered| registered.name == *mbean)
            .ok_or_else(|| unknown_mbean(mbean))
    }
}

impl InMemoryManagementBridge {
    /// Creates a bridge with no applications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an MBean under an application's endpoint.
    ///
    /// The endpoint is created on first use. Registering the same name twice
    /// is a no-op. New MBeans know only the `ROOT` logger.
    ///
    /// # Errors
    ///
    /// Returns bridge transport errors when lock acquisition fails.
    pub fn register_mbean(
        &self,
        endpoint: &BridgeEndpoint,
        name: ManagementObjectName,
    ) -> BridgeResult<()> {
        let mut state = self.write_state()?;
        let mbeans = state.endpoints.entry(endpoint.clone()).or_default();
        if !mbeans.iter().any(|registered| registered.name == name) {
            mbeans.push(RegisteredMbean::new(name));
        }
        Ok(())
    }

    /// Declares a logger on an MBean, optionally with an explicit level.
    ///
    /// # Errors
    ///
    /// Returns a remote error when the endpoint or MBean is unknown, or
    /// transport errors when lock acquisition fails.
    pub fn add_logger(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        logger: &str,
        level: Option<&str>,
    ) -> BridgeResult<()> {
        let mut state = self.write_state()?;
        let registered = state.mbean_mut(endpoint, mbean)?;
        registered.set_level(logger, level);
        Ok(())
    }

    /// Sets a plain attribute value on an MBean.
    ///
    /// # Errors
    ///
    /// Returns a remote error when the endpoint or MBean is unknown, or
    /// transport errors when lock acquisition fails.
    pub fn set_attribute(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        attribute: impl Into<String>,
        value: Value,
    ) -> BridgeResult<()> {
        let mut state = self.write_state()?;
        let registered = state.mbean_mut(endpoint, mbean)?;
        registered.attributes.insert(attribute.into(), value);
        Ok(())
    }

    /// Makes the next port call fail with `error`.
    ///
    /// # Errors
    ///
    /// Returns bridge transport errors when lock acquisition fails.
    pub fn fail_next(&self, error: BridgeError) -> BridgeResult<()> {
        self.write_state()?.pending_failure = Some(error);
        Ok(())
    }

    /// Answers bulk requests in reverse order, as a reordering transport
    /// might.
    ///
    /// # Errors
    ///
    /// Returns bridge transport errors when lock acquisition fails.
    pub fn reverse_bulk_responses(&self, enabled: bool) -> BridgeResult<()> {
        self.write_state()?.reverse_bulk_responses = enabled;
        Ok(())
    }

    /// Returns the number of port calls received so far.
    ///
    /// # Errors
    ///
    /// Returns bridge transport errors when lock acquisition fails.
    pub fn call_count(&self) -> BridgeResult<usize> {
        Ok(self.read_state()?.calls)
    }

    /// Returns the explicitly configured level of a logger, if any.
    ///
    /// # Errors
    ///
    /// Returns a remote error when the endpoint or MBean is unknown, or
    /// transport errors when lock acquisition fails.
    pub fn configured_level(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        logger: &str,
    ) -> BridgeResult<Option<String>> {
        let mut state = self.write_state()?;
        Ok(state.mbean_mut(endpoint, mbean)?.levels.get(logger).cloned())
    }

    fn read_state(&self) -> BridgeResult<std::sync::RwLockReadGuard<'_, InMemoryBridgeState>> {
        self.state
            .read()
            .map_err(|err| BridgeError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> BridgeResult<std::sync::RwLockWriteGuard<'_, InMemoryBridgeState>> {
        self.state
            .write()
            .map_err(|err| BridgeError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl ManagementBridge for InMemoryManagementBridge {
    async fn search(
        &self,
        endpoint: &BridgeEndpoint,
        pattern: &ObjectNamePattern,
    ) -> BridgeResult<Vec<ManagementObjectName>> {
        let mut state = self.write_state()?;
        state.begin_call()?;
        Ok(state
            .mbeans(endpoint)?
            .iter()
            .filter(|registered| pattern.matches(&registered.name))
            .map(|registered| registered.name.clone())
            .collect())
    }

    async fn bulk_request(
        &self,
        endpoint: &BridgeEndpoint,
        requests: Vec<ExecRequest>,
    ) -> BridgeResult<Vec<ExecResponse>> {
        let mut state = self.write_state()?;
        state.begin_call()?;
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let registered = state.mbean_mut(endpoint, request.mbean())?;
            let value = registered.exec(request.operation(), request.arguments())?;
            responses.push(ExecResponse::new(request, value));
        }
        if state.reverse_bulk_responses {
            responses.reverse();
        }
        Ok(responses)
    }

    async fn exec(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        operation: &str,
        arguments: Vec<Value>,
    ) -> BridgeResult<Value> {
        let mut state = self.write_state()?;
        state.begin_call()?;
        state.mbean_mut(endpoint, mbean)?.exec(operation, &arguments)
    }

    async fn read_attr(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        attribute: &str,
    ) -> BridgeResult<Value> {
        let mut state = self.write_state()?;
        state.begin_call()?;
        state.mbean_mut(endpoint, mbean)?.read_attr(attribute)
    }
}

fn unknown_endpoint(endpoint: &BridgeEndpoint) -> BridgeError {
    BridgeError::remote(404, format!("no management bridge at {endpoint}"))
}

fn unknown_mbean(mbean: &ManagementObjectName) -> BridgeError {
    BridgeError::remote(404, format!("instance not found: {mbean}"))
}
