use crate::core::observer::{Listeners, SubscriptionId};
use crate::core::KeyValueStorage;
use crate::domain::model::{FavoriteSet, FavoritesEvent, LoadOrigin, Loaded, ProductId};

pub const FAVORITES_KEY: &str = "favorites";

/// Read the persisted favorites. Never fails: a missing value yields an empty
/// set, an unreadable or malformed one yields an empty set tagged as recovered.
pub fn read_favorites<S: KeyValueStorage + ?Sized>(storage: &S) -> Loaded<FavoriteSet> {
    let raw = match storage.get_item(FAVORITES_KEY) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => {
            tracing::debug!("No stored favorites");
            return Loaded {
                value: FavoriteSet::new(),
                origin: LoadOrigin::Missing,
            };
        }
        Err(e) => {
            tracing::warn!("Error loading favorites from storage: {}", e);
            return Loaded {
                value: FavoriteSet::new(),
                origin: LoadOrigin::RecoveredDefault {
                    reason: e.to_string(),
                },
            };
        }
    };

    match FavoriteSet::from_json(&raw) {
        Ok(value) => {
            tracing::debug!("Loaded {} favorites", value.len());
            Loaded {
                value,
                origin: LoadOrigin::Stored,
            }
        }
        Err(e) => {
            tracing::warn!("Error parsing stored favorites, starting empty: {}", e);
            Loaded {
                value: FavoriteSet::new(),
                origin: LoadOrigin::RecoveredDefault {
                    reason: e.to_string(),
                },
            }
        }
    }
}

/// Owns the favorite set and writes it through to storage after every
/// mutation.
pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    favorites: FavoriteSet,
    origin: LoadOrigin,
    listeners: Listeners<FavoritesEvent>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn load(storage: S) -> Self {
        let Loaded { value, origin } = read_favorites(&storage);
        Self {
            storage,
            favorites: value,
            origin,
            listeners: Listeners::default(),
        }
    }

    /// How the initial set was obtained.
    pub fn load_origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Returns `true` if the id was newly added.
    pub fn add_favorite(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        let added = self.favorites.insert(id.clone());
        self.persist();
        if added {
            self.listeners.notify(&FavoritesEvent::Added(id));
        }
        added
    }

    /// Returns `true` if the id was present.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let removed = self.favorites.remove(id);
        self.persist();
        if removed {
            self.listeners
                .notify(&FavoritesEvent::Removed(ProductId::from(id)));
        }
        removed
    }

    /// Returns the membership after the toggle.
    pub fn toggle_favorite(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        if self.favorites.contains(id.as_str()) {
            self.remove_favorite(id.as_str());
            false
        } else {
            self.add_favorite(id);
            true
        }
    }

    pub fn clear_all_favorites(&mut self) {
        let was_empty = self.favorites.is_empty();
        self.favorites.clear();
        self.persist();
        if !was_empty {
            self.listeners.notify(&FavoritesEvent::Cleared);
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&FavoritesEvent) + Send + Sync + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        let encoded = match self.favorites.to_json() {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("Failed to encode favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set_item(FAVORITES_KEY, &encoded) {
            tracing::warn!("Failed to save favorites: {}", e);
        }
    }
}

impl<S: KeyValueStorage> std::fmt::Debug for FavoritesStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites)
            .field("origin", &self.origin)
            .field("listeners", &self.listeners)
            .finish()
    }
}
