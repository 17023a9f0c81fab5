use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_read_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("missing"), None);
}

#[test]
fn memory_storage_write_then_read() {
    let storage = MemoryStorage::new();
    storage.write("k", "v").unwrap();
    assert_eq!(storage.read("k").as_deref(), Some("v"));
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.write("k", "v").unwrap();
    assert_eq!(b.read("k").as_deref(), Some("v"));
    b.remove("k").unwrap();
    assert_eq!(a.read("k"), None);
}

#[test]
fn memory_storage_seed_does_not_count_as_write() {
    let storage = MemoryStorage::new();
    storage.seed("k", "raw");
    assert_eq!(storage.read("k").as_deref(), Some("raw"));
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("nothing"), Ok(()));
}

// =============================================================
// BrowserStorage (native build)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.write("k", "v"), Ok(()));
    assert_eq!(storage.read("k"), None);
    assert_eq!(storage.remove("k"), Ok(()));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "local storage unavailable");
    assert_eq!(
        StorageError::Write("QuotaExceededError".to_owned()).to_string(),
        "local storage write failed: QuotaExceededError"
    );
}
