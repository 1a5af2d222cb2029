//! # Adapter Traits
//!
//! [`AdapterDescriptor`] is the identity every adapter exposes and the
//! basis of adapter equality. [`Adapter`] adds the four CRUD operations,
//! all required. Backends that only support part of the contract return
//! [`AdapterError::NotImplemented`] for the rest.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;

use serde_json::Value;

use super::config::AdapterConfig;
use super::errors::{AdapterError, AdapterResult};
use super::naming::NamingConvention;
use super::query::{Fields, Query, RecordSet};

/// Name, options and naming conventions of an adapter
pub trait AdapterDescriptor: Any {
    fn name(&self) -> &str;

    fn options(&self) -> &BTreeMap<String, Value>;

    fn resource_naming(&self) -> NamingConvention;

    fn field_naming(&self) -> NamingConvention;

    /// Identity equality: `other` is this very instance.
    ///
    /// A wrapper and the value stored first inside it share an address,
    /// so the concrete types must match too.
    fn same_as(&self, other: &dyn AdapterDescriptor) -> bool {
        Any::type_id(self) == Any::type_id(other) && std::ptr::addr_eq(self, other)
    }

    /// Identity, or equal name, options and naming conventions
    fn equivalent(&self, other: &dyn AdapterDescriptor) -> bool {
        self.same_as(other)
            || (self.name() == other.name()
                && self.options() == other.options()
                && self.resource_naming() == other.resource_naming()
                && self.field_naming() == other.field_naming())
    }
}

impl AdapterDescriptor for AdapterConfig {
    fn name(&self) -> &str {
        AdapterConfig::name(self)
    }

    fn options(&self) -> &BTreeMap<String, Value> {
        AdapterConfig::options(self)
    }

    fn resource_naming(&self) -> NamingConvention {
        AdapterConfig::resource_naming(self)
    }

    fn field_naming(&self) -> NamingConvention {
        AdapterConfig::field_naming(self)
    }
}

/// CRUD contract for a storage backend
pub trait Adapter: AdapterDescriptor + Send + Sync + Debug {
    /// Persist new records. Assigns keys to records that lack one and
    /// writes them back into `records`. Returns the count persisted.
    fn create(&self, records: &mut RecordSet) -> AdapterResult<usize>;

    /// Raw field mappings of every record matching `query`
    fn read(&self, query: &Query) -> AdapterResult<Vec<Fields>>;

    /// Apply `attributes` to every record in `records`. Returns the count updated.
    fn update(&self, attributes: &Fields, records: &RecordSet) -> AdapterResult<usize>;

    /// Remove every record in `records`. Returns the count deleted.
    fn delete(&self, records: &RecordSet) -> AdapterResult<usize>;
}

/// The bare contract: carries a configuration, implements nothing.
#[derive(Debug, Clone)]
pub struct AbstractAdapter {
    config: AdapterConfig,
}

impl AbstractAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl AdapterDescriptor for AbstractAdapter {
    fn name(&self) -> &str {
        self.config.name()
    }

    fn options(&self) -> &BTreeMap<String, Value> {
        self.config.options()
    }

    fn resource_naming(&self) -> NamingConvention {
        self.config.resource_naming()
    }

    fn field_naming(&self) -> NamingConvention {
        self.config.field_naming()
    }
}

impl Adapter for AbstractAdapter {
    fn create(&self, _records: &mut RecordSet) -> AdapterResult<usize> {
        Err(AdapterError::not_implemented(self.name(), "create"))
    }

    fn read(&self, _query: &Query) -> AdapterResult<Vec<Fields>> {
        Err(AdapterError::not_implemented(self.name(), "read"))
    }

    fn update(&self, _attributes: &Fields, _records: &RecordSet) -> AdapterResult<usize> {
        Err(AdapterError::not_implemented(self.name(), "update"))
    }

    fn delete(&self, _records: &RecordSet) -> AdapterResult<usize> {
        Err(AdapterError::not_implemented(self.name(), "delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reflexive() {
        let adapter = AbstractAdapter::new(AdapterConfig::memory("default"));
        assert!(adapter.same_as(&adapter));
        assert!(adapter.equivalent(&adapter));
    }

    #[test]
    fn test_distinct_instances_are_equivalent_not_same() {
        let a = AbstractAdapter::new(AdapterConfig::memory("default"));
        let b = AbstractAdapter::new(AdapterConfig::memory("default"));
        assert!(!a.same_as(&b));
        assert!(a.equivalent(&b));
        assert!(b.equivalent(&a));
    }

    #[test]
    fn test_equivalence_checks_every_part() {
        let base = AdapterConfig::memory("default");
        let a = AbstractAdapter::new(base.clone());

        let renamed = AbstractAdapter::new(AdapterConfig::memory("other"));
        assert!(!a.equivalent(&renamed));

        let mut options = BTreeMap::new();
        options.insert("backend".to_string(), json!("memory"));
        let optioned = AbstractAdapter::new(AdapterConfig::new("default", options));
        assert!(!a.equivalent(&optioned));

        let fields = AbstractAdapter::new(base.clone().with_field_naming(NamingConvention::Identity));
        assert!(!a.equivalent(&fields));

        let resources =
            AbstractAdapter::new(base.with_resource_naming(NamingConvention::Underscored));
        assert!(!a.equivalent(&resources));
    }

    #[test]
    fn test_descriptor_across_types() {
        let config = AdapterConfig::memory("default");
        let adapter = AbstractAdapter::new(config.clone());
        assert!(adapter.equivalent(&config));
        assert!(!adapter.same_as(&config));
    }

    #[test]
    fn test_not_same_as_own_config() {
        let adapter = AbstractAdapter::new(AdapterConfig::memory("default"));
        assert!(!adapter.same_as(adapter.config()));
        assert!(adapter.equivalent(adapter.config()));
    }

    #[test]
    fn test_every_operation_unimplemented() {
        let adapter = AbstractAdapter::new(AdapterConfig::memory("base"));
        let mut set = RecordSet::new("things", "id");

        let not_impl = |op| AdapterError::not_implemented("base", op);
        assert_eq!(adapter.create(&mut set).unwrap_err(), not_impl("create"));
        assert_eq!(adapter.read(&Query::new("things")).unwrap_err(), not_impl("read"));
        assert_eq!(adapter.update(&Fields::new(), &set).unwrap_err(), not_impl("update"));
        assert_eq!(adapter.delete(&set).unwrap_err(), not_impl("delete"));
    }
}
