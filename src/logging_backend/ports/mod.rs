//! Port contracts for logging backend selection.
//!
//! Ports define infrastructure-agnostic interfaces: the management bridge
//! this crate consumes and the logging backend contract it exposes.

mod backend;
mod bridge;

pub use backend::{LoggingBackend, LoggingBackendError, LoggingBackendResult};
pub use bridge::{BridgeError, BridgeResult, ExecRequest, ExecResponse, ManagementBridge};

#[cfg(test)]
pub(crate) use bridge::MockManagementBridge;
