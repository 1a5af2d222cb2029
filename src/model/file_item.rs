//! # File Items
//!
//! A file stored by path. Contents are kept as base64 text so they survive
//! text-oriented backends.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use crate::adapter::Fields;

use super::errors::{ModelError, ModelResult};
use super::repository::Resource;

/// A stored file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub id: Option<u64>,
    pub path: String,
    /// Base64 text
    pub contents: String,
}

impl FileItem {
    /// Unsaved item holding `data`
    pub fn from_bytes(path: impl Into<String>, data: &[u8]) -> Self {
        Self {
            id: None,
            path: path.into(),
            contents: STANDARD.encode(data),
        }
    }

    /// Decoded contents.
    ///
    /// Line breaks and other whitespace are ignored, since some encoders
    /// wrap base64 output every 60 characters.
    pub fn decoded(&self) -> ModelResult<Vec<u8>> {
        let compact: String = self
            .contents
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        Ok(STANDARD.decode(compact)?)
    }

    /// Decoded length computed from the encoded text, without decoding
    pub fn size_hint(&self) -> usize {
        let compact = self
            .contents
            .bytes()
            .filter(|b| !b.is_ascii_whitespace());
        let (len, padding) = compact.fold((0usize, 0usize), |(len, pad), b| {
            (len + 1, if b == b'=' { pad + 1 } else { pad })
        });
        (len / 4 * 3).saturating_sub(padding)
    }
}

fn string_field(fields: &Fields, field: &'static str) -> ModelResult<String> {
    match fields.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ModelError::InvalidField {
            field,
            expected: "string",
        }),
        None => Err(ModelError::MissingField(field)),
    }
}

impl Resource for FileItem {
    const MODEL_NAME: &'static str = "FileItem";
    const KEY: &'static str = "id";
    const PROPERTIES: &'static [&'static str] = &["id", "path", "contents"];

    fn key(&self) -> Option<u64> {
        self.id
    }

    fn set_key(&mut self, key: u64) {
        self.id = Some(key);
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        if let Some(id) = self.id {
            fields.insert("id".into(), Value::from(id));
        }
        fields.insert("path".into(), Value::from(self.path.clone()));
        fields.insert("contents".into(), Value::from(self.contents.clone()));
        fields
    }

    fn from_fields(fields: &Fields) -> ModelResult<Self> {
        let id = match fields.get("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_u64().ok_or(ModelError::InvalidField {
                field: "id",
                expected: "unsigned integer",
            })?),
        };

        Ok(Self {
            id,
            path: string_field(fields, "path")?,
            contents: string_field(fields, "contents")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{
        AbstractAdapter, Adapter, AdapterConfig, AdapterError, MemoryAdapter, NamingConvention,
        Query,
    };
    use crate::model::Repository;
    use serde_json::json;
    use std::sync::Arc;

    fn repository() -> (Repository<FileItem>, Arc<MemoryAdapter>) {
        let adapter = Arc::new(MemoryAdapter::new(AdapterConfig::memory("default")));
        (Repository::new(adapter.clone()), adapter)
    }

    #[test]
    fn test_encoding() {
        let item = FileItem::from_bytes("report.txt", b"hello");
        assert_eq!(item.contents, "aGVsbG8=");
        assert_eq!(item.decoded().unwrap(), b"hello");
        assert_eq!(item.size_hint(), 5);
    }

    #[test]
    fn test_decodes_wrapped_base64() {
        let data = vec![7u8; 100];
        let mut item = FileItem::from_bytes("blob.bin", &data);
        let wrapped: Vec<String> = item
            .contents
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        item.contents = wrapped.join("\n") + "\n";

        assert_eq!(item.decoded().unwrap(), data);
        assert_eq!(item.size_hint(), 100);
    }

    #[test]
    fn test_invalid_base64() {
        let item = FileItem {
            id: None,
            path: "x".into(),
            contents: "not base64!".into(),
        };
        assert!(matches!(item.decoded(), Err(ModelError::Decode(_))));
    }

    #[test]
    fn test_from_fields_validation() {
        let mut fields = Fields::new();
        fields.insert("path".into(), json!("a"));
        assert!(matches!(
            FileItem::from_fields(&fields),
            Err(ModelError::MissingField("contents"))
        ));

        fields.insert("contents".into(), json!(5));
        assert!(matches!(
            FileItem::from_fields(&fields),
            Err(ModelError::InvalidField { field: "contents", .. })
        ));
    }

    #[test]
    fn test_create_and_lookup() {
        let (repo, adapter) = repository();
        let created = repo.create(FileItem::from_bytes("a.txt", b"one")).unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(adapter.count("file_items"), 1);

        let found = repo.first_by("path", "a.txt").unwrap().unwrap();
        assert_eq!(found, created);
        assert!(repo.first_by("path", "b.txt").unwrap().is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let (repo, _) = repository();
        let first = repo.create(FileItem::from_bytes("dup", b"first")).unwrap();
        repo.create(FileItem::from_bytes("dup", b"second")).unwrap();

        assert_eq!(repo.all_by("path", "dup").unwrap().len(), 2);
        let found = repo.first_by("path", "dup").unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.decoded().unwrap(), b"first");

        assert!(repo.destroy(&found).unwrap());
        let remaining = repo.all_by("path", "dup").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].decoded().unwrap(), b"second");
    }

    #[test]
    fn test_update() {
        let (repo, _) = repository();
        let item = repo.create(FileItem::from_bytes("old", b"x")).unwrap();

        assert_eq!(repo.update(&item, &[("path", json!("new"))]).unwrap(), 1);
        assert!(repo.first_by("path", "old").unwrap().is_none());
        assert_eq!(repo.first_by("path", "new").unwrap().unwrap().id, item.id);
    }

    #[test]
    fn test_unsaved_cannot_be_destroyed() {
        let (repo, _) = repository();
        let item = FileItem::from_bytes("a", b"");
        assert!(matches!(repo.destroy(&item), Err(ModelError::Unsaved("FileItem"))));
        assert!(matches!(repo.update(&item, &[]), Err(ModelError::Unsaved(_))));
    }

    #[test]
    fn test_naming_conventions_shape_storage() {
        fn prefixed(name: &str) -> String {
            format!("fs_{}", name)
        }
        let config = AdapterConfig::memory("default")
            .with_resource_naming(NamingConvention::Underscored)
            .with_field_naming(NamingConvention::Custom { name: "prefixed", map: prefixed });
        let adapter = Arc::new(MemoryAdapter::new(config));
        let repo: Repository<FileItem> = Repository::new(adapter.clone());

        assert_eq!(repo.storage_name(), "file_item");
        repo.create(FileItem::from_bytes("a.txt", b"one")).unwrap();

        let raw = adapter.read(&Query::new("file_item")).unwrap();
        assert_eq!(raw[0]["fs_path"], json!("a.txt"));
        assert_eq!(raw[0]["fs_id"], json!(1));

        let found = repo.first_by("path", "a.txt").unwrap().unwrap();
        assert_eq!(found.id, Some(1));
    }

    #[test]
    fn test_adapter_errors_surface() {
        let repo: Repository<FileItem> =
            Repository::new(Arc::new(AbstractAdapter::new(AdapterConfig::memory("base"))));
        match repo.all() {
            Err(ModelError::Adapter(AdapterError::NotImplemented { operation, .. })) => {
                assert_eq!(operation, "read")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
