use crate::core::catalog::{Catalog, Category, Product};
use crate::core::favorites::FavoritesStore;
use crate::core::locale::LocaleStore;
use crate::core::translations::TranslationTable;
use crate::core::{DocumentContext, KeyValueStorage};
use crate::domain::model::Language;
use std::sync::{Arc, Mutex};

/// A product as listed on a page, with its favorite state resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product: &'static Product,
    pub image: Option<String>,
    pub is_favorite: bool,
    /// Accessible label of the heart button, already translated.
    pub favorite_label: String,
}

/// Everything the views consume, built once at startup and passed down.
pub struct AppContext<S: KeyValueStorage + ?Sized, D: DocumentContext> {
    pub favorites: FavoritesStore<Arc<S>>,
    pub locale: LocaleStore<Arc<S>, D>,
    pub catalog: Catalog,
}

/// For callers that touch the context from more than one thread. The store
/// operations read, modify and persist in sequence, so they must not overlap.
pub type SharedAppContext<S, D> = Arc<Mutex<AppContext<S, D>>>;

impl<S: KeyValueStorage + ?Sized, D: DocumentContext> AppContext<S, D> {
    pub fn new(storage: Arc<S>, document: D) -> Self {
        Self::with_default_language(storage, document, Language::En)
    }

    pub fn with_default_language(storage: Arc<S>, document: D, fallback: Language) -> Self {
        let favorites = FavoritesStore::load(Arc::clone(&storage));
        let locale = LocaleStore::load_with(storage, document, TranslationTable::builtin(), fallback);

        tracing::debug!(
            "App context ready: {} favorites, language {}",
            favorites.favorites().len(),
            locale.language()
        );

        Self {
            favorites,
            locale,
            catalog: Catalog::builtin(),
        }
    }

    pub fn into_shared(self) -> SharedAppContext<S, D> {
        Arc::new(Mutex::new(self))
    }

    pub fn card(&self, product: &'static Product) -> ProductCard {
        let is_favorite = self.favorites.is_favorite(product.id);
        let label_key = if is_favorite {
            "common.removeFromFavorites"
        } else {
            "common.addToFavorites"
        };
        ProductCard {
            product,
            image: product.cover_image(),
            is_favorite,
            favorite_label: self.locale.translate(label_key).to_string(),
        }
    }

    pub fn category_cards(&self, category: Category) -> Vec<ProductCard> {
        self.catalog
            .products_in(category)
            .into_iter()
            .map(|p| self.card(p))
            .collect()
    }

    pub fn favorite_cards(&self) -> Vec<ProductCard> {
        self.catalog
            .favorite_products(self.favorites.favorites())
            .into_iter()
            .map(|p| self.card(p))
            .collect()
    }

    /// Category heading in the active language.
    pub fn category_title(&self, category: Category) -> &str {
        self.locale.translate(category.title_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryDocument, MemoryStorage};
    use crate::domain::model::Direction;

    #[test]
    fn test_stores_share_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let mut app = AppContext::new(Arc::clone(&storage), MemoryDocument::new());

        app.favorites.add_favorite("CouchProduct4");
        app.locale.set_language(Language::He);

        let reloaded = AppContext::new(storage, MemoryDocument::new());
        assert!(reloaded.favorites.is_favorite("CouchProduct4"));
        assert_eq!(reloaded.locale.direction(), Direction::Rtl);
    }

    #[test]
    fn test_cards_reflect_favorites_and_language() {
        let mut app = AppContext::new(Arc::new(MemoryStorage::new()), MemoryDocument::new());
        app.favorites.toggle_favorite("BedProduct2");

        let cards = app.category_cards(Category::Beds);
        assert_eq!(cards.len(), 5);
        let favorite = cards.iter().find(|c| c.product.id == "BedProduct2").unwrap();
        assert!(favorite.is_favorite);
        assert_eq!(favorite.favorite_label, "Remove from favorites");
        assert_eq!(
            favorite.image.as_deref(),
            Some("/images/Beds/BedProduct2/1.png")
        );

        app.locale.set_language(Language::He);
        assert_eq!(app.category_title(Category::Beds), "מיטות");
        assert_eq!(app.favorite_cards()[0].favorite_label, "הסר ממועדפים");
    }

    #[test]
    fn test_shared_context_serializes_mutations() {
        let app = AppContext::new(Arc::new(MemoryStorage::new()), MemoryDocument::new());
        let shared = app.into_shared();

        let handles: Vec<_> = (1..=4)
            .map(|n| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    shared
                        .lock()
                        .unwrap()
                        .favorites
                        .add_favorite(format!("CouchProduct{}", n));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let app = shared.lock().unwrap();
        assert_eq!(app.favorites.favorites().len(), 4);
        assert_eq!(app.favorite_cards().len(), 4);
    }
}
