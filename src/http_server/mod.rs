//! # HTTP File Service
//!
//! Exposes stored files as an HTTP resource under a configurable prefix.
//!
//! # Endpoints
//!
//! - `GET /` - HTML listing of stored files
//! - `GET|POST|PUT|DELETE /fs/*path` - file operations

pub mod config;
pub mod errors;
pub mod views;
pub mod fs_routes;
pub mod server;

pub use config::{HttpServerConfig, NotFoundStatus};
pub use errors::{ServiceError, ServiceResult};
pub use server::HttpServer;
