//! # Storage Adapter Contract
//!
//! The uniform interface every storage backend satisfies, independent of
//! backend technology. Callers hold an `Arc<dyn Adapter>` and never learn
//! which backend sits behind it.
//!
//! Backends bundled here:
//! - [`AbstractAdapter`]: the bare contract, every operation unimplemented
//! - [`MemoryAdapter`]: in-process datastore with serial keys
//! - [`ReadOnly`]: wraps another adapter and exposes only `read`

pub mod errors;
pub mod naming;
pub mod config;
pub mod query;
pub mod contract;
pub mod memory;
pub mod read_only;

use std::sync::Arc;

use serde_json::Value;

pub use errors::{AdapterError, AdapterResult};
pub use naming::NamingConvention;
pub use config::AdapterConfig;
pub use query::{Fields, Query, RecordSet};
pub use contract::{AbstractAdapter, Adapter, AdapterDescriptor};
pub use memory::MemoryAdapter;
pub use read_only::ReadOnly;

/// Option key selecting the backend
pub const BACKEND_OPTION: &str = "backend";

/// Option key wrapping the backend in [`ReadOnly`]
pub const READ_ONLY_OPTION: &str = "read_only";

/// Build the adapter described by `config`.
///
/// `options.backend` picks the backend (`"memory"` when absent).
/// `options.read_only = true` wraps it so only `read` is served.
pub fn build_adapter(config: AdapterConfig) -> AdapterResult<Arc<dyn Adapter>> {
    let backend = match config.options().get(BACKEND_OPTION) {
        None => "memory".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(AdapterError::UnknownStorage(other.to_string())),
    };
    let read_only = matches!(config.options().get(READ_ONLY_OPTION), Some(Value::Bool(true)));

    match (backend.as_str(), read_only) {
        ("memory", false) => Ok(Arc::new(MemoryAdapter::new(config))),
        ("memory", true) => Ok(Arc::new(ReadOnly::new(MemoryAdapter::new(config)))),
        ("abstract", _) => Ok(Arc::new(AbstractAdapter::new(config))),
        (other, _) => Err(AdapterError::UnknownStorage(other.to_string())),
    }
}
