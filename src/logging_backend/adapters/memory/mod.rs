//! In-memory adapters for deterministic tests and demos.

mod bridge;

pub use bridge::InMemoryManagementBridge;
