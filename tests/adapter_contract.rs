//! Adapter Contract Tests
//!
//! - equality is reflexive and structural across distinct instances
//! - the bare contract fails every CRUD operation with NotImplemented
//! - adapters are interchangeable behind `Arc<dyn Adapter>`

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;

use datastore_fs::adapter::{
    build_adapter, AbstractAdapter, Adapter, AdapterConfig, AdapterDescriptor, AdapterError,
    Fields, MemoryAdapter, NamingConvention, Query, ReadOnly, RecordSet,
};

fn configs() -> Vec<AdapterConfig> {
    let mut options = BTreeMap::new();
    options.insert("backend".to_string(), json!("memory"));

    vec![
        AdapterConfig::memory("default"),
        AdapterConfig::new("default", options),
        AdapterConfig::memory("default").with_field_naming(NamingConvention::Identity),
        AdapterConfig::memory("default")
            .with_resource_naming(NamingConvention::UnderscoredAndPluralizedWithoutModule),
        AdapterConfig::memory("secondary"),
    ]
}

fn check_identity<A: Adapter>(make: impl Fn(AdapterConfig) -> A) {
    for config in configs() {
        let a = make(config.clone());
        let b = make(config);

        assert!(a.same_as(&a));
        assert!(a.equivalent(&a));

        assert!(!a.same_as(&b));
        assert!(a.equivalent(&b));
        assert!(b.equivalent(&a));
    }
}

#[test]
fn test_equality_is_reflexive_and_structural() {
    check_identity(AbstractAdapter::new);
    check_identity(MemoryAdapter::new);
    check_identity(|config| ReadOnly::new(MemoryAdapter::new(config)));
}

#[test]
fn test_equivalence_across_backends() {
    let config = AdapterConfig::memory("default");
    let memory = MemoryAdapter::new(config.clone());
    let bare = AbstractAdapter::new(config);
    assert!(memory.equivalent(&bare));
    assert!(!memory.same_as(&bare));
}

#[test]
fn test_different_settings_are_not_equivalent() {
    let configs = configs();
    for (i, a) in configs.iter().enumerate() {
        for (j, b) in configs.iter().enumerate() {
            assert_eq!(a.equivalent(b), i == j, "configs {} and {}", i, j);
            assert_eq!(a == b, i == j);
        }
    }
}

#[test]
fn test_bare_contract_is_not_implemented() {
    let mut options = BTreeMap::new();
    options.insert("backend".to_string(), json!("abstract"));
    let adapter: Arc<dyn Adapter> = build_adapter(AdapterConfig::new("base", options)).unwrap();
    let mut set = RecordSet::new("file_items", "id");

    for (operation, result) in [
        ("create", adapter.create(&mut set).map(|_| ())),
        ("read", adapter.read(&Query::new("file_items")).map(|_| ())),
        ("update", adapter.update(&Fields::new(), &set).map(|_| ())),
        ("delete", adapter.delete(&set).map(|_| ())),
    ] {
        match result {
            Err(AdapterError::NotImplemented { adapter, operation: op }) => {
                assert_eq!(adapter, "base");
                assert_eq!(op, operation);
            }
            other => panic!("{} returned {:?}", operation, other),
        }
    }
}

#[test]
fn test_memory_backend_round_trip_through_trait_object() {
    let adapter: Arc<dyn Adapter> = build_adapter(AdapterConfig::memory("default")).unwrap();

    let mut set = RecordSet::new("file_items", "id");
    for path in ["a", "b", "a"] {
        let mut fields = Fields::new();
        fields.insert("path".into(), json!(path));
        set.push(fields);
    }
    assert_eq!(adapter.create(&mut set).unwrap(), 3);

    let matches = adapter
        .read(&Query::new("file_items").filter("path", "a"))
        .unwrap();
    assert_eq!(matches.len(), 2);

    let mut attributes = Fields::new();
    attributes.insert("path".into(), json!("c"));
    let mut first = RecordSet::new("file_items", "id");
    first.push(matches[0].clone());
    assert_eq!(adapter.update(&attributes, &first).unwrap(), 1);
    assert_eq!(adapter.delete(&first).unwrap(), 1);

    let remaining = adapter.read(&Query::new("file_items")).unwrap();
    let ids: Vec<_> = remaining.iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!(2), json!(3)]);
}
