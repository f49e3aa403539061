//! Management bridge port for remote MBean access.

use crate::logging_backend::domain::{BridgeEndpoint, ManagementObjectName, ObjectNamePattern};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for management bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Remote-call contract of an application's management bridge.
///
/// Every method is a single remote round trip. Timeouts and transport
/// concerns belong to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManagementBridge: Send + Sync {
    /// Lists object names matching `pattern`.
    async fn search(
        &self,
        endpoint: &BridgeEndpoint,
        pattern: &ObjectNamePattern,
    ) -> BridgeResult<Vec<ManagementObjectName>>;

    /// Executes a batch of operations in one round trip.
    ///
    /// Each response echoes the request it answers. Responses may arrive in
    /// any order.
    async fn bulk_request(
        &self,
        endpoint: &BridgeEndpoint,
        requests: Vec<ExecRequest>,
    ) -> BridgeResult<Vec<ExecResponse>>;

    /// Executes a single operation and returns its result value.
    async fn exec(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        operation: &str,
        arguments: Vec<Value>,
    ) -> BridgeResult<Value>;

    /// Reads an attribute value.
    async fn read_attr(
        &self,
        endpoint: &BridgeEndpoint,
        mbean: &ManagementObjectName,
        attribute: &str,
    ) -> BridgeResult<Value>;
}

/// An `exec` request inside a bulk call.
///
/// Serializes to the bridge wire shape
/// `{"type":"exec","mbean":...,"operation":...,"arguments":[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "exec")]
pub struct ExecRequest {
    mbean: ManagementObjectName,
    operation: String,
    #[serde(default)]
    arguments: Vec<Value>,
}

impl ExecRequest {
    /// Creates an exec request.
    #[must_use]
    pub fn new(
        mbean: ManagementObjectName,
        operation: impl Into<String>,
        arguments: Vec<Value>,
    ) -> Self {
        Self {
            mbean,
            operation: operation.into(),
            arguments,
        }
    }

    /// Returns the target MBean.
    #[must_use]
    pub const fn mbean(&self) -> &ManagementObjectName {
        &self.mbean
    }

    /// Returns the operation name.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the operation arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}

/// One answer of a bulk call, echoing the request it answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecResponse {
    request: ExecRequest,
    #[serde(default)]
    value: Value,
}

impl ExecResponse {
    /// Creates a response for `request`.
    #[must_use]
    pub const fn new(request: ExecRequest, value: Value) -> Self {
        Self { request, value }
    }

    /// Returns the echoed request.
    #[must_use]
    pub const fn request(&self) -> &ExecRequest {
        &self.request
    }

    /// Returns the operation result.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Errors returned by management bridge implementations.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// The bridge answered but rejected the request.
    #[error("bridge request failed with status {status}: {message}")]
    Remote {
        /// Status reported by the bridge.
        status: u16,
        /// Error message reported by the bridge.
        message: String,
    },

    /// The bridge could not be reached or its answer could not be read.
    #[error("bridge transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl BridgeError {
    /// Creates a remote rejection.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
