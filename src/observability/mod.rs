//! Observability
//!
//! Structured JSON logging. Logging is a side channel: it never alters
//! request handling and never fails the caller.
//!
//! ```ignore
//! use datastore_fs::observability::{events, Logger};
//!
//! Logger::info(events::FILE_CREATED, &[("path", "report.txt")]);
//! ```

pub mod events;
pub mod logger;

pub use logger::{Logger, Severity};
