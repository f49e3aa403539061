//! Log-level introspection and control for monitored applications.
//!
//! A monitored application exposes its logging framework through a remote
//! management bridge (Jolokia). This module locates the logging configurator
//! MBean for an application and adapts it to a uniform contract: list logger
//! names, read effective levels, and change a level. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
