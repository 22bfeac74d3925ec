//! File-backed persistence tests: data written through one handle survives
//! reopening the same path.

use formstash_core::config::{BackendKind, StorageConfig};
use formstash_core::errors::StorageError;
use formstash_core::traits::IKeyValueStore;
use formstash_storage::{open_backend, FileStore, ScopedStore};

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let store = ScopedStore::new("survey", FileStore::open(&path).unwrap()).unwrap();
        store.write("draft", "payload").unwrap();
        store.write("other", "x").unwrap();
        store.remove("other").unwrap();
    }

    let store = ScopedStore::new("survey", FileStore::open(&path).unwrap()).unwrap();
    assert_eq!(store.read("draft").as_deref(), Some("payload"));
    assert_eq!(store.list_keys(), vec!["draft"]);
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(&dir.path().join("new.json")).unwrap();
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn keys_are_listed_in_lexicographic_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(&dir.path().join("s.json")).unwrap();
    store.set("b/2", "").unwrap();
    store.set("a/1", "").unwrap();
    assert_eq!(store.keys().unwrap(), vec!["a/1", "b/2"]);
}

#[test]
fn corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[test]
fn file_on_disk_is_a_flat_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("s.json");
    let store = FileStore::open(&path).unwrap();
    store.set("form/a", "1").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!({"form/a": "1"}));
}

#[test]
fn open_backend_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        backend: BackendKind::File,
        file_path: dir.path().join("cfg.json").display().to_string(),
    };
    let backend = open_backend(&config).unwrap();
    let store = ScopedStore::new("s", backend).unwrap();
    store.write("k", "v").unwrap();
    assert!(dir.path().join("cfg.json").exists());

    let memory = open_backend(&StorageConfig::default()).unwrap();
    memory.set("k", "v").unwrap();
    assert_eq!(memory.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn failed_write_leaves_entries_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    let store = FileStore::open(&nested.join("s.json")).unwrap();
    store.set("s/kept", "old").unwrap();

    std::fs::remove_dir_all(&nested).unwrap();

    assert!(store.set("s/a", "v").is_err());
    assert_eq!(store.get("s/a").unwrap(), None);
    assert!(store.set("s/kept", "new").is_err());
    assert_eq!(store.get("s/kept").unwrap().as_deref(), Some("old"));
    assert!(store.remove("s/kept").is_err());
    assert_eq!(store.keys().unwrap(), vec!["s/kept"]);
}
