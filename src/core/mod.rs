pub mod app;
pub mod carousel;
pub mod catalog;
pub mod colors;
pub mod favorites;
pub mod locale;
pub mod observer;
pub mod product_view;
pub mod translations;

pub use crate::domain::model::{
    Direction, FavoriteSet, FavoritesEvent, Language, LoadOrigin, Loaded, LocaleEvent,
    LocalePreference, ProductId,
};
pub use crate::domain::ports::{DocumentContext, KeyValueStorage};
pub use crate::utils::error::Result;
