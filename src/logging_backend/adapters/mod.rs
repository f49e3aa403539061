//! Adapter implementations for logging backend and bridge ports.

pub mod memory;

mod logback;
mod noop;
mod synthetic;

pub use logback::LogbackBackend;
pub use noop::NoopBackend;
pub use synthetic::SyntheticBackend;
