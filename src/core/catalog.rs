use crate::domain::model::{FavoriteSet, ProductId};
use crate::utils::error::{Result, StoreError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beds,
    Couches,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Beds, Category::Couches];

    /// Route segment, e.g. `beds`.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Beds => "beds",
            Category::Couches => "couches",
        }
    }

    /// Asset folder name, the slug with its first letter capitalized.
    pub fn folder(self) -> &'static str {
        match self {
            Category::Beds => "Beds",
            Category::Couches => "Couches",
        }
    }

    /// Translation key of the category's display name.
    pub fn title_key(self) -> &'static str {
        match self {
            Category::Beds => "nav.beds",
            Category::Couches => "nav.couches",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "beds" => Some(Category::Beds),
            "couches" => Some(Category::Couches),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Category::from_slug(s).ok_or_else(|| StoreError::UnknownCategory {
            slug: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub images: &'static [&'static str],
    pub category: Category,
}

impl Product {
    pub fn product_id(&self) -> ProductId {
        ProductId::from(self.id)
    }

    pub fn image_paths(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|image| image_path(self.category, self.id, image))
            .collect()
    }

    pub fn cover_image(&self) -> Option<String> {
        self.images
            .first()
            .map(|image| image_path(self.category, self.id, image))
    }
}

/// `/images/{Folder}/{product_id}/{image}`
pub fn image_path(category: Category, product_id: &str, image: &str) -> String {
    format!("/images/{}/{}/{}", category.folder(), product_id, image)
}

/// Read-only product listing.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { products: PRODUCTS }
    }

    /// Every product, beds first, in listing order.
    pub fn all_products(&self) -> &'static [Product] {
        self.products
    }

    pub fn products_in(&self, category: Category) -> Vec<&'static Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// `None` when no product matches; restricting to a category only
    /// searches that category.
    pub fn product_by_id(&self, id: &str, category: Option<Category>) -> Option<&'static Product> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .find(|p| p.id == id)
    }

    /// Favorite products in listing order. Ids with no catalog entry are skipped.
    pub fn favorite_products(&self, favorites: &FavoriteSet) -> Vec<&'static Product> {
        self.products
            .iter()
            .filter(|p| favorites.contains(p.id))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn product(
    id: &'static str,
    name: &'static str,
    price: u32,
    images: &'static [&'static str],
    category: Category,
) -> Product {
    Product {
        id,
        name,
        price,
        images,
        category,
    }
}

static PRODUCTS: &[Product] = &[
    product("BedProduct1", "Wavy Upholstered Bed Frame", 899, &["1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png"], Category::Beds),
    product("BedProduct2", "Classic Bed Frame", 799, &["1.png", "2.png", "3.png"], Category::Beds),
    product("BedProduct3", "Boucle Bed Frame", 699, &["1.png", "2.png"], Category::Beds),
    product("BedProduct4", "Contemporary Bed Frame", 849, &["1.png", "2.png"], Category::Beds),
    product("BedProduct5", "Elegant Bed Frame", 749, &["1.png", "2.png"], Category::Beds),
    product("CouchProduct1", "Luxury Sofa", 1299, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct2", "Modular Couch", 899, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct3", "Comfort Sectional", 1499, &["1.png", "2.png", "3.png", "4.png"], Category::Couches),
    product("CouchProduct4", "Deep-Seated Sectional Couch", 1099, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct5", "Contemporary Couch", 999, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct6", "Modular Corduroy Sofa", 1199, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct7", "The Mags Sofa", 799, &["1.png", "2.png"], Category::Couches),
    product("CouchProduct8", "Premium Sectional", 1599, &["1.png", "2.png", "3.png", "4.png"], Category::Couches),
    product("CouchProduct9", "Stylish Sofa", 949, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct10", "Modern Sectional", 1399, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct11", "Cozy Couch", 1049, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct12", "Dark Green Corduroy Couch", 849, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct13", "Square-arm Leather Sofa", 1349, &["1.png", "2.png", "3.png", "4.png"], Category::Couches),
    product("CouchProduct14", "Premium Couch", 1249, &["1.png", "2.png", "3.png"], Category::Couches),
    product("CouchProduct15", "L-Shaped Modular Sofa", 749, &["1.png", "2.png"], Category::Couches),
    product("CouchProduct16", "The Harmony Modular Couch", 799, &["1.png", "2.png"], Category::Couches),
    product("CouchProduct17", "Comfortable Sofa", 1149, &["1.png", "2.png", "3.png"], Category::Couches),
];
