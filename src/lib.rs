//! Logctl: log-level introspection and control for monitored applications.
//!
//! This crate selects and adapts a logging backend for an application whose
//! logging framework is reachable through a remote management bridge. Callers
//! get one contract (list loggers, read effective levels, set a level)
//! whichever framework the application uses.
//!
//! # Architecture
//!
//! Logctl follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (bridge, backends)
//!
//! # Modules
//!
//! - [`logging_backend`]: Backend selection, MBean resolution, and the
//!   logging backend variants

pub mod logging_backend;
