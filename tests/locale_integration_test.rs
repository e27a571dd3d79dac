use std::sync::{Arc, Mutex};
use storefront_prefs::core::locale::{read_language, LANGUAGE_KEY};
use storefront_prefs::{
    AppContext, Direction, KeyValueStorage, Language, LoadOrigin, LocaleStore, LocalStorage,
    MemoryDocument, MemoryStorage,
};
use tempfile::TempDir;

#[test]
fn test_stored_hebrew_sets_rtl_document() {
    let storage = MemoryStorage::with_items([(LANGUAGE_KEY, "he")]);
    let document = MemoryDocument::new();
    let store = LocaleStore::load(storage, document.clone());

    assert!(store.is_rtl());
    assert_eq!(store.load_origin(), &LoadOrigin::Stored);

    let attrs = document.attributes();
    assert_eq!(attrs.dir, Some(Direction::Rtl));
    assert_eq!(attrs.dir.unwrap().as_str(), "rtl");
    assert_eq!(attrs.lang.unwrap().tag(), "he");
}

#[test]
fn test_unsupported_stored_language_defaults_to_english() {
    for stored in ["fr", "EN", " he", "hebrew"] {
        let loaded = read_language(&MemoryStorage::with_items([(LANGUAGE_KEY, stored)]), Language::En);
        assert_eq!(loaded.value, Language::En, "stored value {:?}", stored);
        assert!(loaded.origin.is_recovered());
    }
}

#[test]
fn test_rtl_tracks_language_through_every_transition() {
    let mut store = LocaleStore::load(MemoryStorage::new(), MemoryDocument::new());
    let sequence = [
        Language::He,
        Language::He,
        Language::En,
        Language::He,
        Language::En,
        Language::En,
    ];

    for language in sequence {
        store.set_language(language);
        assert_eq!(store.is_rtl(), store.language() == Language::He);
        assert_eq!(store.document().attributes().dir, Some(store.direction()));
        assert_eq!(store.document().attributes().lang, Some(language));
    }
}

#[test]
fn test_missing_translation_returns_key_in_both_languages() {
    let mut store = LocaleStore::load(MemoryStorage::new(), MemoryDocument::new());
    for language in Language::ALL {
        store.set_language(language);
        assert_eq!(store.translate("nonexistent.key"), "nonexistent.key");
    }
}

#[test]
fn test_language_persists_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();

    let mut store = LocaleStore::load(LocalStorage::new(base.clone()), MemoryDocument::new());
    store.toggle_language();
    drop(store);

    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join(LANGUAGE_KEY)).unwrap(),
        "he"
    );
    let store = LocaleStore::load(LocalStorage::new(base), MemoryDocument::new());
    assert_eq!(store.language(), Language::He);
}

#[test]
fn test_app_context_observers_see_both_stores() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = AppContext::new(Arc::clone(&storage), MemoryDocument::new());
    let log = Arc::new(Mutex::new(Vec::new()));

    let favorites_log = Arc::clone(&log);
    app.favorites
        .subscribe(move |event| favorites_log.lock().unwrap().push(format!("{:?}", event)));
    let locale_log = Arc::clone(&log);
    app.locale.subscribe(move |event| {
        locale_log
            .lock()
            .unwrap()
            .push(format!("{}->{}", event.previous, event.current))
    });

    app.favorites.toggle_favorite("CouchProduct1");
    app.locale.set_language(Language::He);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "Added(ProductId(\"CouchProduct1\"))".to_string(),
            "en->he".to_string(),
        ]
    );
    assert_eq!(storage.get_item(LANGUAGE_KEY).unwrap().as_deref(), Some("he"));
}
