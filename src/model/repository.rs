//! # Repository
//!
//! Typed CRUD over an adapter for one resource type.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::adapter::{Adapter, Fields, Query, RecordSet};

use super::errors::{ModelError, ModelResult};

/// A typed record stored through an adapter.
///
/// `to_fields`/`from_fields` speak model-level field names; the repository
/// renames them for the backend.
pub trait Resource: Sized {
    /// Model name, translated with the resource naming convention
    const MODEL_NAME: &'static str;

    /// Serial key property
    const KEY: &'static str;

    /// Every property, key included
    const PROPERTIES: &'static [&'static str];

    fn key(&self) -> Option<u64>;

    fn set_key(&mut self, key: u64);

    fn to_fields(&self) -> Fields;

    fn from_fields(fields: &Fields) -> ModelResult<Self>;
}

/// Typed access to the records of `R`
pub struct Repository<R> {
    adapter: Arc<dyn Adapter>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Repository<R> {
    pub fn new(adapter: Arc<dyn Adapter>) -> Self {
        Self {
            adapter,
            _resource: PhantomData,
        }
    }

    pub fn adapter(&self) -> &Arc<dyn Adapter> {
        &self.adapter
    }

    /// Storage-level name of `R`
    pub fn storage_name(&self) -> String {
        self.adapter.resource_naming().apply(R::MODEL_NAME)
    }

    fn field_name(&self, property: &str) -> String {
        self.adapter.field_naming().apply(property)
    }

    fn to_storage(&self, fields: Fields) -> Fields {
        fields
            .into_iter()
            .map(|(property, value)| (self.field_name(&property), value))
            .collect()
    }

    fn from_storage(&self, mut stored: Fields) -> ModelResult<R> {
        let mut fields = Fields::new();
        for property in R::PROPERTIES {
            if let Some(value) = stored.remove(&self.field_name(property)) {
                fields.insert(property.to_string(), value);
            }
        }
        R::from_fields(&fields)
    }

    fn record_set(&self, resource: &R) -> ModelResult<RecordSet> {
        let key = resource.key().ok_or(ModelError::Unsaved(R::MODEL_NAME))?;
        let mut set = RecordSet::new(self.storage_name(), self.field_name(R::KEY));
        let mut record = Fields::new();
        record.insert(set.key.clone(), Value::from(key));
        set.push(record);
        Ok(set)
    }

    fn fetch(&self, query: Query) -> ModelResult<Vec<R>> {
        self.adapter
            .read(&query)?
            .into_iter()
            .map(|stored| self.from_storage(stored))
            .collect()
    }

    /// Every record, in key order
    pub fn all(&self) -> ModelResult<Vec<R>> {
        self.fetch(Query::new(self.storage_name()))
    }

    /// Records whose `property` equals `value`, in key order
    pub fn all_by(&self, property: &str, value: impl Into<Value>) -> ModelResult<Vec<R>> {
        self.fetch(Query::new(self.storage_name()).filter(self.field_name(property), value))
    }

    /// The first record whose `property` equals `value`
    pub fn first_by(&self, property: &str, value: impl Into<Value>) -> ModelResult<Option<R>> {
        let query = Query::new(self.storage_name())
            .filter(self.field_name(property), value)
            .limit(1);
        Ok(self.fetch(query)?.into_iter().next())
    }

    /// Persist a new record and return it with its assigned key
    pub fn create(&self, mut resource: R) -> ModelResult<R> {
        let mut set = RecordSet::new(self.storage_name(), self.field_name(R::KEY));
        set.push(self.to_storage(resource.to_fields()));

        if self.adapter.create(&mut set)? == 0 {
            return Err(ModelError::NotPersisted(R::MODEL_NAME));
        }
        let key = set
            .records
            .first()
            .and_then(|record| set.key_of(record))
            .ok_or(ModelError::NotPersisted(R::MODEL_NAME))?;
        resource.set_key(key);

        Ok(resource)
    }

    /// Apply model-level `attributes` to a saved record
    pub fn update(&self, resource: &R, attributes: &[(&str, Value)]) -> ModelResult<usize> {
        let set = self.record_set(resource)?;
        let attributes: Fields = attributes
            .iter()
            .map(|(property, value)| (self.field_name(property), value.clone()))
            .collect();
        Ok(self.adapter.update(&attributes, &set)?)
    }

    /// Remove a saved record. Returns whether anything was deleted.
    pub fn destroy(&self, resource: &R) -> ModelResult<bool> {
        let set = self.record_set(resource)?;
        Ok(self.adapter.delete(&set)? > 0)
    }
}
