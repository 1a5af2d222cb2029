//! # Resource Models
//!
//! Maps typed records onto an adapter. Model and field names are translated
//! to storage names with the adapter's naming conventions, so the same model
//! works against any backend.

pub mod errors;
pub mod repository;
pub mod file_item;

pub use errors::{ModelError, ModelResult};
pub use repository::{Repository, Resource};
pub use file_item::FileItem;
