//! Application services for logging backend selection.

mod config;
mod resolver;
mod selector;

pub use config::{BackendKind, ParseBackendKindError, SelectorConfig, SelectorConfigError};
pub use resolver::{ConfiguratorResolver, ResolveError, ResolveResult};
pub use selector::{
    BackendSelector, FixedPolicy, SelectedBackend, SelectionError, SelectionPolicy,
    SelectionResult,
};

#[cfg(test)]
pub(crate) use resolver::disambiguate;
