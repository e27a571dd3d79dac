use crate::core::KeyValueStorage;
use crate::utils::error::{Result, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: Mutex::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn poisoned(key: &str) -> StoreError {
        StoreError::StorageError {
            key: key.to_string(),
            message: "storage lock poisoned".to_string(),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| Self::poisoned(key))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned(key))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned(key))?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("language").unwrap(), None);

        storage.set_item("language", "he").unwrap();
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("he"));

        storage.remove_item("language").unwrap();
        assert_eq!(storage.get_item("language").unwrap(), None);
    }

    #[test]
    fn test_with_items_seeds_values() {
        let storage = MemoryStorage::with_items([("favorites", "[]")]);
        assert_eq!(storage.get_item("favorites").unwrap().as_deref(), Some("[]"));
    }
}
