use crate::core::KeyValueStorage;
use crate::utils::error::Result;
use crate::utils::validation::validate_storage_key;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed key/value storage: one file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    fn item_path(&self, key: &str) -> Result<PathBuf> {
        validate_storage_key(key)?;
        Ok(Path::new(&self.base_path).join(key))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.item_path(key)?;
        match fs::read_to_string(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.item_path(key)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write then rename so a crash never leaves a half-written value.
        let tmp_path = full_path.with_file_name(format!("{}.tmp", key));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &full_path)?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), full_path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let full_path = self.item_path(key)?;
        match fs::remove_file(&full_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
