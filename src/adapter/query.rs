//! # Queries and Record Sets
//!
//! Everything here uses storage-level names; translation from model names
//! happens in the model layer.

use std::collections::BTreeMap;

use serde_json::Value;

/// Raw field-value mapping as a backend stores it
pub type Fields = BTreeMap<String, Value>;

/// Read request: equality conditions ANDed together, plus paging.
///
/// Backends return matches in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub storage_name: String,
    pub conditions: Vec<(String, Value)>,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl Query {
    /// Match every record of `storage_name`
    pub fn new(storage_name: impl Into<String>) -> Self {
        Self {
            storage_name: storage_name.into(),
            conditions: Vec::new(),
            limit: None,
            offset: 0,
        }
    }

    /// Require `field == value`
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Whether `fields` satisfies every condition
    pub fn matches(&self, fields: &Fields) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| fields.get(field) == Some(value))
    }
}

/// Records of one storage name, identified by their `key` field
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub storage_name: String,
    pub key: String,
    pub records: Vec<Fields>,
}

impl RecordSet {
    pub fn new(storage_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            storage_name: storage_name.into(),
            key: key.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Fields) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Key value of a record, if it has a non-negative integer key
    pub fn key_of(&self, record: &Fields) -> Option<u64> {
        record.get(&self.key).and_then(Value::as_u64)
    }
}
