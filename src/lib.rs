//! datastore-fs - store and retrieve files by path over a pluggable datastore
//!
//! - [`adapter`]: the storage adapter contract and bundled backends
//! - [`model`]: typed resources mapped onto an adapter
//! - [`http_server`]: the HTTP file service
//! - [`observability`]: structured JSON logging
//! - [`cli`]: command-line entry point

pub mod adapter;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
