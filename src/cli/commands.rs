//! CLI command implementations

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::adapter::{build_adapter, AdapterConfig, NamingConvention};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure. Every section is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub adapter: AdapterSettings,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

/// Storage backend section
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterSettings {
    #[serde(default = "default_adapter_name")]
    pub name: String,

    /// Backend options, frozen once the adapter is built
    #[serde(default)]
    pub options: BTreeMap<String, Value>,

    #[serde(default = "default_resource_naming")]
    pub resource_naming: NamingConvention,

    #[serde(default = "default_field_naming")]
    pub field_naming: NamingConvention,
}

fn default_log_level() -> Severity {
    Severity::Info
}
fn default_adapter_name() -> String {
    "default".to_string()
}
fn default_resource_naming() -> NamingConvention {
    NamingConvention::RESOURCE_DEFAULT
}
fn default_field_naming() -> NamingConvention {
    NamingConvention::FIELD_DEFAULT
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            name: default_adapter_name(),
            options: BTreeMap::new(),
            resource_naming: default_resource_naming(),
            field_naming: default_field_naming(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            adapter: AdapterSettings::default(),
            log_level: default_log_level(),
        }
    }
}

impl AdapterSettings {
    pub fn to_adapter_config(&self) -> AdapterConfig {
        AdapterConfig::new(self.name.clone(), self.options.clone())
            .with_resource_naming(self.resource_naming)
            .with_field_naming(self.field_naming)
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.http.validate().map_err(CliError::config_error)?;

        if self.adapter.name.is_empty() {
            return Err(CliError::config_error("adapter.name must not be empty"));
        }

        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let mut config = Config::load_or_default(config.as_deref())?;
            if let Some(host) = host {
                config.http.host = host;
            }
            if let Some(port) = port {
                config.http.port = port;
            }
            config.validate()?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Validate a configuration file and build its adapter without serving
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    build_adapter(config.adapter.to_adapter_config())
        .map_err(|e| CliError::adapter_error(e.to_string()))?;

    println!(
        "Configuration OK: {} (adapter '{}', files under {})",
        config.http.socket_addr(),
        config.adapter.name,
        config.http.fs_route()
    );
    Ok(())
}

/// Build the adapter and serve HTTP until the process stops
pub fn serve(config: Config) -> CliResult<()> {
    Logger::set_min_severity(config.log_level);

    let adapter = build_adapter(config.adapter.to_adapter_config())
        .map_err(|e| CliError::adapter_error(e.to_string()))?;
    let server = HttpServer::new(config.http, adapter);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
