use serde::Serialize;

pub const SWATCH_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub id: String,
    pub image: String,
}

/// The fabric swatches, ids `1` to `7`.
pub fn swatches() -> Vec<ColorSwatch> {
    (1..=SWATCH_COUNT)
        .map(|n| ColorSwatch {
            id: n.to_string(),
            image: format!("/images/Colors/{}.jpg", n),
        })
        .collect()
}

/// Swatch grid with a single enlarged image at a time.
#[derive(Debug, Clone)]
pub struct ColorGallery {
    swatches: Vec<ColorSwatch>,
    opened: Option<usize>,
}

impl ColorGallery {
    pub fn new() -> Self {
        Self {
            swatches: swatches(),
            opened: None,
        }
    }

    pub fn swatches(&self) -> &[ColorSwatch] {
        &self.swatches
    }

    /// Enlarge a swatch. Unknown ids leave the gallery unchanged.
    pub fn open(&mut self, id: &str) -> Option<&ColorSwatch> {
        let index = self.swatches.iter().position(|s| s.id == id)?;
        self.opened = Some(index);
        self.swatches.get(index)
    }

    pub fn close(&mut self) {
        self.opened = None;
    }

    pub fn opened(&self) -> Option<&ColorSwatch> {
        self.opened.and_then(|i| self.swatches.get(i))
    }
}

impl Default for ColorGallery {
    fn default() -> Self {
        Self::new()
    }
}

/// Color choice on a product page. Starts on swatch `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSelection {
    selected: String,
}

impl ColorSelection {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Returns `false` for ids that are not swatches.
    pub fn select(&mut self, id: &str) -> bool {
        if (1..=SWATCH_COUNT).any(|n| n.to_string() == id) {
            self.selected = id.to_string();
            true
        } else {
            false
        }
    }
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self {
            selected: "1".to_string(),
        }
    }
}
