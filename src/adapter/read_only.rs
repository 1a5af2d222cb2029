//! # Read-Only Wrapper

use std::collections::BTreeMap;

use serde_json::Value;

use super::contract::{Adapter, AdapterDescriptor};
use super::errors::{AdapterError, AdapterResult};
use super::naming::NamingConvention;
use super::query::{Fields, Query, RecordSet};

/// Serves `read` from the wrapped adapter and rejects every mutator.
#[derive(Debug)]
pub struct ReadOnly<A> {
    inner: A,
}

impl<A: Adapter> ReadOnly<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Adapter> AdapterDescriptor for ReadOnly<A> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn options(&self) -> &BTreeMap<String, Value> {
        self.inner.options()
    }

    fn resource_naming(&self) -> NamingConvention {
        self.inner.resource_naming()
    }

    fn field_naming(&self) -> NamingConvention {
        self.inner.field_naming()
    }
}

impl<A: Adapter> Adapter for ReadOnly<A> {
    fn create(&self, _records: &mut RecordSet) -> AdapterResult<usize> {
        Err(AdapterError::not_implemented(self.name(), "create"))
    }

    fn read(&self, query: &Query) -> AdapterResult<Vec<Fields>> {
        self.inner.read(query)
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
    use crate::adapter::{AdapterConfig, MemoryAdapter};
    use serde_json::json;

    #[test]
    fn test_reads_pass_through() {
        let memory = MemoryAdapter::new(AdapterConfig::memory("feed"));
        let mut set = RecordSet::new("entries", "id");
        let mut fields = Fields::new();
        fields.insert("title".into(), json!("hello"));
        set.push(fields);
        memory.create(&mut set).unwrap();

        let feed = ReadOnly::new(memory);
        let rows = feed.read(&Query::new("entries")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], json!("hello"));

        assert!(feed.delete(&set).is_err());
        assert!(feed.update(&Fields::new(), &set).is_err());
        assert_eq!(feed.inner().count("entries"), 1);
    }

    #[test]
    fn test_equivalent_to_inner_config() {
        let config = AdapterConfig::memory("feed");
        let feed = ReadOnly::new(MemoryAdapter::new(config.clone()));
        assert!(feed.equivalent(&config));
    }

    #[test]
    fn test_wrapper_is_not_its_inner_adapter() {
        let feed = ReadOnly::new(MemoryAdapter::new(AdapterConfig::memory("feed")));
        assert!(!feed.same_as(feed.inner()));
        assert!(feed.inner().same_as(feed.inner()));
        assert!(feed.equivalent(feed.inner()));
    }
}
