use anyhow::Result;
use std::sync::Arc;
use storefront_prefs::core::favorites::{read_favorites, FAVORITES_KEY};
use storefront_prefs::{
    FavoriteSet, FavoritesStore, KeyValueStorage, LoadOrigin, LocalStorage, MemoryStorage,
    ProductId, StoreError,
};
use tempfile::TempDir;

fn decode(storage: &impl KeyValueStorage) -> Vec<String> {
    let raw = storage.get_item(FAVORITES_KEY).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Storage whose writes always fail, like a full browser quota.
struct ReadOnlyStorage(MemoryStorage);

impl KeyValueStorage for ReadOnlyStorage {
    fn get_item(&self, key: &str) -> storefront_prefs::Result<Option<String>> {
        self.0.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> storefront_prefs::Result<()> {
        Err(StoreError::StorageError {
            key: key.to_string(),
            message: "quota exceeded".to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> storefront_prefs::Result<()> {
        self.0.remove_item(key)
    }
}

#[test]
fn test_toggle_on_empty_storage_persists_single_id() {
    let mut store = FavoritesStore::load(MemoryStorage::new());
    assert_eq!(store.load_origin(), &LoadOrigin::Missing);

    store.toggle_favorite("CouchProduct1");

    assert!(store.is_favorite("CouchProduct1"));
    assert_eq!(decode(store.storage()), vec!["CouchProduct1"]);
}

#[test]
fn test_clear_after_three_adds() {
    let mut store = FavoritesStore::load(MemoryStorage::new());
    let ids = ["BedProduct1", "CouchProduct5", "CouchProduct12"];
    for id in ids {
        store.add_favorite(id);
    }
    assert_eq!(decode(store.storage()).len(), 3);

    store.clear_all_favorites();

    for id in ids {
        assert!(!store.is_favorite(id));
    }
    assert!(decode(store.storage()).is_empty());
}

#[test]
fn test_corrupted_value_yields_empty_set() {
    let storage = MemoryStorage::with_items([(FAVORITES_KEY, "not json")]);
    let loaded = read_favorites(&storage);

    assert!(loaded.value.is_empty());
    match loaded.origin {
        LoadOrigin::RecoveredDefault { reason } => assert!(!reason.is_empty()),
        other => panic!("expected recovered default, got {:?}", other),
    }
}

#[test]
fn test_reload_roundtrip() {
    let sets: Vec<Vec<&str>> = vec![
        vec![],
        vec!["BedProduct1"],
        vec!["CouchProduct1", "CouchProduct17", "BedProduct5", "id with spaces", "מזהה"],
    ];

    for ids in sets {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FavoritesStore::load(Arc::clone(&storage));
        store.clear_all_favorites();
        for id in &ids {
            store.add_favorite(*id);
        }

        let expected: FavoriteSet = ids.iter().map(|id| ProductId::from(*id)).collect();
        let reloaded = FavoritesStore::load(storage);
        assert_eq!(reloaded.load_origin(), &LoadOrigin::Stored);
        assert_eq!(reloaded.favorites(), &expected);
    }
}

#[test]
fn test_write_failures_keep_in_memory_state() {
    let mut store = FavoritesStore::load(ReadOnlyStorage(MemoryStorage::new()));

    assert!(store.add_favorite("CouchProduct9"));
    assert!(store.is_favorite("CouchProduct9"));
    assert_eq!(store.storage().get_item(FAVORITES_KEY).unwrap(), None);
}

#[test]
fn test_file_storage_survives_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    {
        let mut store = FavoritesStore::load(LocalStorage::new(base.clone()));
        store.add_favorite("BedProduct2");
        store.add_favorite("CouchProduct3");
        store.remove_favorite("BedProduct2");
    }

    let store = FavoritesStore::load(LocalStorage::new(base.clone()));
    assert!(store.is_favorite("CouchProduct3"));
    assert!(!store.is_favorite("BedProduct2"));

    let on_disk = std::fs::read_to_string(temp_dir.path().join(FAVORITES_KEY))?;
    assert_eq!(on_disk, r#"["CouchProduct3"]"#);
    Ok(())
}
