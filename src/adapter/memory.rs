//! # In-Memory Backend
//!
//! An in-process datastore. Each storage name is a table of records keyed
//! by serial integers starting at 1. Serials only grow; a deleted key is
//! never handed out again.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::RwLock;

use serde_json::Value;

use super::config::AdapterConfig;
use super::contract::{Adapter, AdapterDescriptor};
use super::errors::{AdapterError, AdapterResult};
use super::naming::NamingConvention;
use super::query::{Fields, Query, RecordSet};

#[derive(Debug, Default)]
struct Table {
    last_serial: u64,
    rows: BTreeMap<u64, Fields>,
}

/// In-memory storage backend
#[derive(Debug)]
pub struct MemoryAdapter {
    config: AdapterConfig,
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            config,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records stored under `storage_name`
    pub fn count(&self, storage_name: &str) -> usize {
        self.tables
            .read()
            .map(|tables| tables.get(storage_name).map_or(0, |t| t.rows.len()))
            .unwrap_or(0)
    }

    fn poisoned<E>(_: E) -> AdapterError {
        AdapterError::Internal("Lock poisoned".into())
    }

    fn keys_of(records: &RecordSet) -> AdapterResult<Vec<u64>> {
        records
            .records
            .iter()
            .map(|record| {
                records.key_of(record).ok_or_else(|| AdapterError::MissingKey {
                    storage_name: records.storage_name.clone(),
                })
            })
            .collect()
    }
}

impl AdapterDescriptor for MemoryAdapter {
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

impl Adapter for MemoryAdapter {
    fn create(&self, records: &mut RecordSet) -> AdapterResult<usize> {
        let mut tables = self.tables.write().map_err(Self::poisoned)?;
        let table = tables.entry(records.storage_name.clone()).or_default();

        // Resolve every key before touching the table, so a bad record
        // leaves the whole batch unwritten.
        let mut last_serial = table.last_serial;
        let mut batch = HashSet::new();
        let mut planned = Vec::with_capacity(records.len());
        for record in &records.records {
            let key = match record.get(&records.key) {
                None | Some(Value::Null) => last_serial + 1,
                Some(value) => value.as_u64().filter(|key| *key > 0).ok_or_else(|| {
                    AdapterError::MissingKey {
                        storage_name: records.storage_name.clone(),
                    }
                })?,
            };
            // An explicit key that already exists is not persisted again
            if table.rows.contains_key(&key) || !batch.insert(key) {
                planned.push(None);
                continue;
            }
            last_serial = last_serial.max(key);
            planned.push(Some(key));
        }

        let key_field = records.key.clone();
        let mut persisted = 0;
        for (record, key) in records.records.iter_mut().zip(planned) {
            let Some(key) = key else {
                continue;
            };
            record.insert(key_field.clone(), Value::from(key));
            table.rows.insert(key, record.clone());
            persisted += 1;
        }
        table.last_serial = last_serial;

        Ok(persisted)
    }

    fn read(&self, query: &Query) -> AdapterResult<Vec<Fields>> {
        let tables = self.tables.read().map_err(Self::poisoned)?;
        let Some(table) = tables.get(&query.storage_name) else {
            return Ok(Vec::new());
        };

        let matches = table
            .rows
            .values()
            .filter(|row| query.matches(row))
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(matches)
    }

    fn update(&self, attributes: &Fields, records: &RecordSet) -> AdapterResult<usize> {
        let keys = Self::keys_of(records)?;
        let mut tables = self.tables.write().map_err(Self::poisoned)?;
        let Some(table) = tables.get_mut(&records.storage_name) else {
            return Ok(0);
        };

        let mut updated = 0;
        for key in keys {
            if let Some(row) = table.rows.get_mut(&key) {
                for (field, value) in attributes {
                    // Keys are immutable once assigned
                    if *field != records.key {
                        row.insert(field.clone(), value.clone());
                    }
                }
                updated += 1;
            }
        }

        Ok(updated)
    }

    fn delete(&self, records: &RecordSet) -> AdapterResult<usize> {
        let keys = Self::keys_of(records)?;
        let mut tables = self.tables.write().map_err(Self::poisoned)?;
        let Some(table) = tables.get_mut(&records.storage_name) else {
            return Ok(0);
        };

        Ok(keys
            .into_iter()
            .filter(|key| table.rows.remove(key).is_some())
            .count())
    }
}
