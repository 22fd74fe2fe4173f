/// Static photo catalog
///
/// The catalog is an ordered list of photo records embedded into the binary
/// as JSON. There is no database and no network fetch: the data is parsed
/// once at startup and never mutated afterwards.
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// The embedded catalog data, field names matching the original JSON shape.
const CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

/// Category key -> display label, in presentation order.
/// `all` is a pseudo-category matching every record.
pub const CATEGORIES: [(&str, &str); 4] = [
    ("all", "Alle"),
    ("klassiker", "Klassiker"),
    ("sportwagen", "Sportwagen"),
    ("youngtimer", "Youngtimer"),
];

/// A single photo in the catalog
///
/// Immutable value; clones are cheap enough for the bounded catalogs this
/// application handles (tens of records).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Stable identifier; assigned from the catalog position when the
    /// record does not carry one explicitly
    #[serde(default)]
    pub id: Option<usize>,
    /// Reference to the grid-sized image
    pub thumbnail: String,
    /// Reference to the detail-sized image
    pub fullsize: String,
    /// Alternative text announced to assistive technology
    pub alt: String,
    /// Short caption shown under the image
    pub caption: String,
    /// Category key; unknown categories are permitted but never match a
    /// filter control
    pub category: String,
    /// Model year, display string
    pub year: String,
    /// Longer description shown in the grid item
    #[serde(default)]
    pub description: String,
    /// Technical specifications, spec-key -> display value.
    /// Only keys present in the known-label table are ever rendered.
    #[serde(default)]
    pub technical_data: BTreeMap<String, String>,
    /// True when the record has no real image and should render a
    /// generated placeholder
    #[serde(default)]
    pub is_placeholder: bool,
}

/// Errors raised while loading the embedded catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full static set of photo records, in catalog order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    photos: Vec<PhotoRecord>,
}

impl Catalog {
    /// Parse the embedded catalog and assign positional ids where absent
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut photos: Vec<PhotoRecord> = serde_json::from_str(json)?;
        for (position, photo) in photos.iter_mut().enumerate() {
            if photo.id.is_none() {
                photo.id = Some(position);
            }
        }
        Ok(Self { photos })
    }

    /// Build a catalog directly from records (used by tests)
    pub fn from_records(photos: Vec<PhotoRecord>) -> Self {
        Self { photos }
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Look up the display label for a category key
pub fn category_label(key: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}
