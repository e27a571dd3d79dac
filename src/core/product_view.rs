use crate::core::catalog::Product;
use crate::core::colors::ColorSelection;
use serde::Serialize;

/// Collapsible sections on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dimensions,
    Description,
}

impl Section {
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Dimensions => "product.dimensions",
            Section::Description => "product.description",
        }
    }
}

/// Translation key and value of each row in the dimensions section.
/// Every product shares them.
pub const DIMENSIONS: [(&str, &str); 4] = [
    ("product.dimensions.width", "84\" (213 cm)"),
    ("product.dimensions.depth", "36\" (91 cm)"),
    ("product.dimensions.height", "34\" (86 cm)"),
    ("product.dimensions.weight", "120 lbs (54 kg)"),
];

/// Page state for one product: the shown image, the open section and the
/// chosen color.
#[derive(Debug, Clone)]
pub struct ProductView {
    product: &'static Product,
    image_index: usize,
    open_section: Option<Section>,
    color: ColorSelection,
}

impl ProductView {
    pub fn new(product: &'static Product) -> Self {
        Self {
            product,
            image_index: 0,
            open_section: Some(Section::Dimensions),
            color: ColorSelection::default(),
        }
    }

    pub fn product(&self) -> &'static Product {
        self.product
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Thumbnail click. Returns `false` and keeps the current image when
    /// `index` is past the last image.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index < self.product.images.len() {
            self.image_index = index;
            true
        } else {
            false
        }
    }

    /// `None` only for a product without images.
    pub fn current_image_path(&self) -> Option<String> {
        self.product
            .image_paths()
            .into_iter()
            .nth(self.image_index)
    }

    pub fn open_section(&self) -> Option<Section> {
        self.open_section
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.open_section == Some(section)
    }

    /// Opens `section`, closing any other. Toggling the open section closes it.
    pub fn toggle_section(&mut self, section: Section) {
        self.open_section = if self.is_open(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn color(&self) -> &ColorSelection {
        &self.color
    }

    /// Returns `false` for ids that are not swatches.
    pub fn select_color(&mut self, id: &str) -> bool {
        self.color.select(id)
    }
}
