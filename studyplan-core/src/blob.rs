//! Key-value blob persistence.
//!
//! Each collection lives in a single named slot that is read whole and
//! replaced whole on every mutation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{PlannerError, PlannerResult};

/// A store of byte blobs addressed by fixed keys.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if the slot is empty.
    fn read(&self, key: &str) -> PlannerResult<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> PlannerResult<()>;

    /// Empty the slot. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> PlannerResult<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn read(&self, key: &str) -> PlannerResult<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> PlannerResult<()> {
        (**self).write(key, bytes)
    }

    fn remove(&self, key: &str) -> PlannerResult<()> {
        (**self).remove(key)
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBlobStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> PlannerResult<Option<Vec<u8>>> {
        let path = self.path_for(key);

        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> PlannerResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        // Write then rename so readers never see a half-written blob
        std::fs::write(&temp, bytes)?;
        std::fs::rename(&temp, &path)?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote blob");
        Ok(())
    }

    fn remove(&self, key: &str) -> PlannerResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process blob store, used by tests and embedders that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    slots: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> PlannerResult<Option<Vec<u8>>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> PlannerResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> PlannerResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// The records of one blob, plus the array elements that failed to parse.
///
/// Unparsed elements are kept verbatim and written back after the records,
/// so a mutation never drops data it could not read.
#[derive(Debug, Clone, PartialEq)]
pub struct Records<T> {
    pub items: Vec<T>,
    unparsed: Vec<serde_json::Value>,
}

/// Load a JSON array of records from `key`.
///
/// An empty slot is an empty list. A blob that is not a JSON array is an
/// error. Array elements that don't deserialize into `T` are set aside.
pub fn load<T, B>(blobs: &B, key: &str) -> PlannerResult<Records<T>>
where
    T: DeserializeOwned,
    B: BlobStore + ?Sized,
{
    let mut records = Records {
        items: Vec::new(),
        unparsed: Vec::new(),
    };

    let Some(bytes) = blobs.read(key)? else {
        return Ok(records);
    };

    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| PlannerError::Serialization(format!("'{key}' is not valid JSON: {e}")))?;

    let serde_json::Value::Array(elements) = value else {
        return Err(PlannerError::Serialization(format!(
            "'{key}' does not contain a list"
        )));
    };

    for (index, element) in elements.into_iter().enumerate() {
        match <T as serde::Deserialize>::deserialize(&element) {
            Ok(record) => records.items.push(record),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "skipping malformed record");
                records.unparsed.push(element);
            }
        }
    }

    Ok(records)
}

/// Only the records of `key` that parse.
pub fn load_records<T, B>(blobs: &B, key: &str) -> PlannerResult<Vec<T>>
where
    T: DeserializeOwned,
    B: BlobStore + ?Sized,
{
    Ok(load(blobs, key)?.items)
}

/// Replace the blob under `key` with the records followed by any unparsed elements.
pub fn save<T, B>(blobs: &B, key: &str, records: &Records<T>) -> PlannerResult<()>
where
    T: Serialize,
    B: BlobStore + ?Sized,
{
    let mut elements = records
        .items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    elements.extend(records.unparsed.iter().cloned());

    let bytes = serde_json::to_vec_pretty(&elements)?;
    blobs.write(key, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.read("k").unwrap(), None);

        store.write("k", b"[1]").unwrap();
        assert_eq!(store.read("k").unwrap(), Some(b"[1]".to_vec()));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("data"));

        assert_eq!(store.read("schedules").unwrap(), None);

        store.write("schedules", b"[]").unwrap();
        assert!(dir.path().join("data/schedules.json").exists());
        assert!(!dir.path().join("data/schedules.json.tmp").exists());
        assert_eq!(store.read("schedules").unwrap(), Some(b"[]".to_vec()));

        store.remove("schedules").unwrap();
        store.remove("schedules").unwrap();
        assert_eq!(store.read("schedules").unwrap(), None);
    }

    #[test]
    fn test_load_records_missing_key_is_empty() {
        let store = MemoryBlobStore::new();
        let records: Vec<Record> = load_records(&store, "missing").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_records_skips_malformed() {
        let store = MemoryBlobStore::new();
        store
            .write("k", br#"[{"name":"a"}, {"nope":1}, 42, {"name":"b"}]"#)
            .unwrap();

        let records: Vec<Record> = load_records(&store, "k").unwrap();
        assert_eq!(
            records,
            vec![
                Record { name: "a".into() },
                Record { name: "b".into() }
            ]
        );
    }

    #[test]
    fn test_load_records_rejects_non_array() {
        let store = MemoryBlobStore::new();

        store.write("k", br#"{"name":"a"}"#).unwrap();
        assert!(matches!(
            load_records::<Record, _>(&store, "k"),
            Err(PlannerError::Serialization(_))
        ));

        store.write("k", b"not json").unwrap();
        assert!(load_records::<Record, _>(&store, "k").is_err());
    }

    #[test]
    fn test_save_keeps_unparsed_elements() {
        let store = MemoryBlobStore::new();
        store.write("k", br#"[{"name":"a"}, {"nope":1}]"#).unwrap();

        let mut records: Records<Record> = load(&store, "k").unwrap();
        assert_eq!(records.items, vec![Record { name: "a".into() }]);

        records.items.push(Record { name: "b".into() });
        save(&store, "k", &records).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&store.read("k").unwrap().unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!([{"name":"a"}, {"name":"b"}, {"nope":1}]));
        assert_eq!(load_records::<Record, _>(&store, "k").unwrap().len(), 2);
    }
}
