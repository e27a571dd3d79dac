use crate::core::observer::{Listeners, SubscriptionId};
use crate::core::translations::{interpolate, TranslationTable};
use crate::core::{DocumentContext, KeyValueStorage};
use crate::domain::model::{Direction, Language, LoadOrigin, Loaded, LocaleEvent, LocalePreference};

pub const LANGUAGE_KEY: &str = "language";

/// Read the persisted language tag. Unknown or unreadable values fall back to
/// `fallback`.
pub fn read_language<S: KeyValueStorage + ?Sized>(
    storage: &S,
    fallback: Language,
) -> Loaded<Language> {
    match storage.get_item(LANGUAGE_KEY) {
        Ok(Some(tag)) if !tag.is_empty() => match Language::from_tag(&tag) {
            Some(language) => Loaded {
                value: language,
                origin: LoadOrigin::Stored,
            },
            None => {
                tracing::warn!("Ignoring unsupported stored language '{}'", tag);
                Loaded {
                    value: fallback,
                    origin: LoadOrigin::RecoveredDefault {
                        reason: format!("unsupported language tag '{}'", tag),
                    },
                }
            }
        },
        Ok(_) => Loaded {
            value: fallback,
            origin: LoadOrigin::Missing,
        },
        Err(e) => {
            tracing::warn!("Error loading language from storage: {}", e);
            Loaded {
                value: fallback,
                origin: LoadOrigin::RecoveredDefault {
                    reason: e.to_string(),
                },
            }
        }
    }
}

/// Active language, its derived direction, and translated text.
pub struct LocaleStore<S: KeyValueStorage, D: DocumentContext> {
    storage: S,
    document: D,
    preference: LocalePreference,
    origin: LoadOrigin,
    translations: TranslationTable,
    listeners: Listeners<LocaleEvent>,
}

impl<S: KeyValueStorage, D: DocumentContext> LocaleStore<S, D> {
    pub fn load(storage: S, document: D) -> Self {
        Self::load_with(storage, document, TranslationTable::builtin(), Language::En)
    }

    /// Load with a custom table and the language used when nothing usable is
    /// stored.
    pub fn load_with(
        storage: S,
        document: D,
        translations: TranslationTable,
        fallback: Language,
    ) -> Self {
        let Loaded { value, origin } = read_language(&storage, fallback);
        let mut store = Self {
            storage,
            document,
            preference: LocalePreference::new(value),
            origin,
            translations,
            listeners: Listeners::default(),
        };
        store.apply_to_document();
        store
    }

    pub fn load_origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn preference(&self) -> LocalePreference {
        self.preference
    }

    pub fn language(&self) -> Language {
        self.preference.language()
    }

    pub fn direction(&self) -> Direction {
        self.preference.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.preference.is_rtl()
    }

    pub fn set_language(&mut self, language: Language) {
        let previous = self.language();
        self.preference = LocalePreference::new(language);

        if let Err(e) = self.storage.set_item(LANGUAGE_KEY, language.tag()) {
            tracing::warn!("Failed to save language: {}", e);
        }
        self.apply_to_document();

        if previous != language {
            tracing::info!("Language changed from {} to {}", previous, language);
            self.listeners.notify(&LocaleEvent {
                previous,
                current: language,
            });
        }
    }

    /// Switch to the other supported language and return it.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.language().other();
        self.set_language(next);
        next
    }

    /// Label for the language switcher: the name of the language it switches to.
    pub fn switch_label(&self) -> &'static str {
        match self.language() {
            Language::En => "עברית",
            Language::He => "English",
        }
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.lookup(self.language(), key)
    }

    /// Translate, then fill `{name}` placeholders.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.translate(key), args)
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&LocaleEvent) + Send + Sync + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn apply_to_document(&mut self) {
        self.document.set_direction(self.preference.direction());
        self.document.set_language(self.preference.language());
    }
}

impl<S: KeyValueStorage, D: DocumentContext> std::fmt::Debug for LocaleStore<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("preference", &self.preference)
            .field("origin", &self.origin)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryDocument, MemoryStorage};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn store_with(tag: Option<&str>) -> LocaleStore<MemoryStorage, MemoryDocument> {
        let storage = match tag {
            Some(tag) => MemoryStorage::with_items([(LANGUAGE_KEY, tag)]),
            None => MemoryStorage::new(),
        };
        LocaleStore::load(storage, MemoryDocument::new())
    }

    #[test]
    fn test_defaults_to_english() {
        let store = store_with(None);
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.load_origin(), &LoadOrigin::Missing);
        assert!(!store.is_rtl());
    }

    #[test]
    fn test_unsupported_tag_defaults_to_english() {
        let store = store_with(Some("fr"));
        assert_eq!(store.language(), Language::En);
        assert!(store.load_origin().is_recovered());
    }

    #[test]
    fn test_load_applies_document_attributes() {
        let store = store_with(Some("he"));
        let attrs = store.document().attributes();
        assert_eq!(attrs.dir, Some(Direction::Rtl));
        assert_eq!(attrs.lang, Some(Language::He));
        assert_eq!(attrs.writes, 2);
    }

    #[test]
    fn test_set_language_persists_and_propagates() {
        let mut store = store_with(None);
        store.set_language(Language::He);

        assert!(store.is_rtl());
        assert_eq!(
            store.storage().get_item(LANGUAGE_KEY).unwrap().as_deref(),
            Some("he")
        );
        assert_eq!(store.document().attributes().dir, Some(Direction::Rtl));

        store.set_language(Language::En);
        assert_eq!(store.document().attributes().dir, Some(Direction::Ltr));
        assert_eq!(store.document().attributes().lang, Some(Language::En));
    }

    #[test]
    fn test_every_set_language_rewrites_document() {
        let mut store = store_with(None);
        assert_eq!(store.document().attributes().writes, 2);

        store.set_language(Language::He);
        assert_eq!(store.document().attributes().writes, 4);

        // Same language still reapplies both attributes.
        store.set_language(Language::He);
        assert_eq!(store.document().attributes().writes, 6);

        store.toggle_language();
        assert_eq!(store.document().attributes().writes, 8);
    }

    #[test]
    fn test_toggle_and_switch_label() {
        let mut store = store_with(None);
        assert_eq!(store.switch_label(), "עברית");
        assert_eq!(store.toggle_language(), Language::He);
        assert_eq!(store.switch_label(), "English");
        assert_eq!(store.toggle_language(), Language::En);
    }

    #[test]
    fn test_translate_follows_language() {
        let mut store = store_with(None);
        assert_eq!(store.translate("favorites.title"), "My Favorites");
        store.set_language(Language::He);
        assert_eq!(store.translate("favorites.title"), "המועדפים שלי");
        assert_eq!(store.translate("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn test_translate_with_product_name() {
        let store = store_with(None);
        let text = store.translate_with("product.description.text", &[("product", "Luxury Sofa")]);
        assert!(text.contains("our premium Luxury Sofa."));
    }

    #[test]
    fn test_listeners_fire_on_change_only() {
        let mut store = store_with(None);
        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = changes.clone();
        let id = store.subscribe(move |event| {
            assert_ne!(event.previous, event.current);
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.set_language(Language::En);
        store.set_language(Language::He);
        store.set_language(Language::He);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id));
        store.set_language(Language::En);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_fallback_language() {
        let store = LocaleStore::load_with(
            MemoryStorage::new(),
            MemoryDocument::new(),
            TranslationTable::builtin(),
            Language::He,
        );
        assert!(store.is_rtl());
    }
}
