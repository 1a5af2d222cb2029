//! # Adapter Configuration

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use super::naming::NamingConvention;

/// Identity and settings of one storage backend instance.
///
/// `options` is frozen at construction; clones share the same map.
/// Two configurations are equal when name, options and both naming
/// conventions match by value.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    name: String,
    options: Arc<BTreeMap<String, Value>>,
    resource_naming: NamingConvention,
    field_naming: NamingConvention,
}

impl AdapterConfig {
    /// Create a config with the default naming conventions
    pub fn new(name: impl Into<String>, options: BTreeMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            options: Arc::new(options),
            resource_naming: NamingConvention::RESOURCE_DEFAULT,
            field_naming: NamingConvention::FIELD_DEFAULT,
        }
    }

    /// In-memory backend named `name`, no options
    pub fn memory(name: impl Into<String>) -> Self {
        Self::new(name, BTreeMap::new())
    }

    pub fn with_resource_naming(mut self, convention: NamingConvention) -> Self {
        self.resource_naming = convention;
        self
    }

    pub fn with_field_naming(mut self, convention: NamingConvention) -> Self {
        self.field_naming = convention;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &BTreeMap<String, Value> {
        &self.options
    }

    pub fn resource_naming(&self) -> NamingConvention {
        self.resource_naming
    }

    pub fn field_naming(&self) -> NamingConvention {
        self.field_naming
    }
}
