use crate::domain::model::{Direction, Language};
use crate::utils::error::Result;
use std::sync::Arc;

/// String-valued key/value storage that survives restarts.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Document-level presentation attributes driven by the active language.
pub trait DocumentContext: Send {
    fn set_direction(&mut self, direction: Direction);
    fn set_language(&mut self, language: Language);
}
