use crate::core::DocumentContext;
use crate::domain::model::{Direction, Language};
use std::sync::{Arc, Mutex};

/// Snapshot of the document's `dir` and `lang` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: Option<Direction>,
    pub lang: Option<Language>,
    /// Number of attribute writes, both fields counted.
    pub writes: usize,
}

/// Records the attributes it is given. Clones share the same record, so a
/// caller can keep one handle and give the other to a `LocaleStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    attributes: Arc<Mutex<DocumentAttributes>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> DocumentAttributes {
        match self.attributes.lock() {
            Ok(attrs) => attrs.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn with_attributes(&self, f: impl FnOnce(&mut DocumentAttributes)) {
        match self.attributes.lock() {
            Ok(mut attrs) => f(&mut attrs),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl DocumentContext for MemoryDocument {
    fn set_direction(&mut self, direction: Direction) {
        tracing::debug!("document dir={}", direction);
        self.with_attributes(|attrs| {
            attrs.dir = Some(direction);
            attrs.writes += 1;
        });
    }

    fn set_language(&mut self, language: Language) {
        tracing::debug!("document lang={}", language);
        self.with_attributes(|attrs| {
            attrs.lang = Some(language);
            attrs.writes += 1;
        });
    }
}
