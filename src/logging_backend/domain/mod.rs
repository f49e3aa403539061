//! Domain model for logging backend selection.
//!
//! The domain models the monitored application, the structured management
//! object names returned by the bridge, and the logger/level pairs exchanged
//! with callers. All transport concerns are kept outside the domain boundary.

mod application;
mod endpoint;
mod error;
mod level;
mod logger;
mod object_name;

pub use application::{Application, ApplicationId, ApplicationName};
pub use endpoint::BridgeEndpoint;
pub use error::{LoggingDomainError, ParseLogLevelError};
pub use level::LogLevel;
pub use logger::{LoggerDescriptor, LoggerLevel};
pub use object_name::{ManagementObjectName, ObjectNamePattern};
