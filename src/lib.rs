pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MemoryDocument, MemoryStorage};
pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::PrefsConfig;
pub use crate::core::app::{AppContext, ProductCard, SharedAppContext};
pub use crate::core::catalog::{Catalog, Category, Product};
pub use crate::core::favorites::FavoritesStore;
pub use crate::core::locale::LocaleStore;
pub use crate::core::product_view::{ProductView, Section};
pub use crate::core::translations::TranslationTable;
pub use crate::domain::model::{Direction, FavoriteSet, Language, LoadOrigin, ProductId};
pub use crate::domain::ports::{DocumentContext, KeyValueStorage};
pub use crate::utils::error::{Result, StoreError};
