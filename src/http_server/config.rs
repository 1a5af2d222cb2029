//! HTTP Server Configuration
//!
//! Host, port, file route prefix, CORS and not-found behavior.

use serde::{Deserialize, Serialize};

/// Status returned when `GET` finds no file at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundStatus {
    /// 404 Not Found
    #[default]
    NotFound,
    /// 200 OK with the not-found message, for clients of the legacy service
    Ok,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4567)
    #[serde(default = "default_port")]
    pub port: u16,

    /// First path segment of file routes (default: "fs")
    #[serde(default = "default_fs_prefix")]
    pub fs_prefix: String,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default)]
    pub not_found_status: NotFoundStatus,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4567
}

fn default_fs_prefix() -> String {
    "fs".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fs_prefix: default_fs_prefix(),
            cors_origins: Vec::new(),
            not_found_status: NotFoundStatus::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Route prefix for file operations, e.g. `/fs`
    pub fn fs_route(&self) -> String {
        format!("/{}", self.fs_prefix)
    }

    /// Check the settings the router depends on
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.fs_prefix.is_empty() || self.fs_prefix.contains('/') {
            return Err(format!(
                "Invalid fs_prefix: '{}'. Must be a single non-empty path segment.",
                self.fs_prefix
            ));
        }
        Ok(())
    }
}
