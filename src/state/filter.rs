/// Filter engine
///
/// Derives the filtered view of the catalog from a category key. The view
/// is recomputed wholesale on every filter change and held only until the
/// next recompute; the catalog itself is never mutated. Keeping the active
/// filter key and the derived view in one struct means the visual filter
/// state and the data view cannot drift apart.
use crate::state::catalog::{Catalog, PhotoRecord};

/// Compute the filtered view for a category key.
///
/// `all` matches every record; unknown keys yield an empty view rather
/// than an error. Catalog order is preserved, no re-sort.
pub fn apply_filter(catalog: &Catalog, key: &str) -> Vec<PhotoRecord> {
    if key == "all" {
        return catalog.photos().to_vec();
    }
    catalog
        .photos()
        .iter()
        .filter(|photo| photo.category == key)
        .cloned()
        .collect()
}

/// The active filter and its derived view
#[derive(Debug, Clone)]
pub struct GalleryState {
    /// Currently selected category key
    current_filter: String,
    /// Filtered view: the subset of the catalog matching `current_filter`,
    /// in catalog order. Modal indices refer to positions in this list.
    filtered: Vec<PhotoRecord>,
}

impl GalleryState {
    /// Start with the `all` pseudo-category selected
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            current_filter: "all".to_owned(),
            filtered: apply_filter(catalog, "all"),
        }
    }

    /// Select a new filter and recompute the view in one step
    pub fn set_filter(&mut self, catalog: &Catalog, key: &str) {
        self.current_filter = key.to_owned();
        self.filtered = apply_filter(catalog, key);
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    pub fn filtered(&self) -> &[PhotoRecord] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(caption: &str, category: &str) -> PhotoRecord {
        PhotoRecord {
            id: None,
            thumbnail: format!("assets/img/{caption}.jpg"),
            fullsize: format!("assets/img/{caption}.jpg"),
            alt: format!("{caption} Testbild"),
            caption: caption.to_owned(),
            category: category.to_owned(),
            year: "1970".to_owned(),
            description: String::new(),
            technical_data: BTreeMap::new(),
            is_placeholder: true,
        }
    }

    /// Six records, three of them `klassiker`, as in the spec scenario.
    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("kaefer", "klassiker"),
            record("porsche", "sportwagen"),
            record("mercedes", "klassiker"),
            record("bmw", "youngtimer"),
            record("jaguar", "klassiker"),
            record("ford", "youngtimer"),
        ])
    }

    #[test]
    fn unknown_filter_yields_empty_view() {
        let catalog = sample_catalog();
        assert!(apply_filter(&catalog, "limousine").is_empty());
        assert!(apply_filter(&catalog, "").is_empty());
    }

    #[test]
    fn all_returns_every_record() {
        let catalog = sample_catalog();
        let view = apply_filter(&catalog, "all");
        assert_eq!(view.len(), 6);
        assert_eq!(view, catalog.photos());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let catalog = sample_catalog();
        let view = apply_filter(&catalog, "klassiker");
        let captions: Vec<&str> = view.iter().map(|p| p.caption.as_str()).collect();
        assert_eq!(
            captions,
            ["kaefer", "mercedes", "jaguar"],
            "relative catalog order must be stable"
        );
    }

    #[test]
    fn filtered_view_indexes_the_view_not_the_catalog() {
        let catalog = sample_catalog();
        let view = apply_filter(&catalog, "klassiker");
        // Index 1 of the filtered view is the second klassiker, which is
        // the third record of the catalog.
        assert_eq!(view[1].caption, "mercedes");
        assert_ne!(view[1], catalog.photos()[1]);
    }

    #[test]
    fn set_filter_replaces_view_atomically() {
        let catalog = sample_catalog();
        let mut gallery = GalleryState::new(&catalog);
        assert_eq!(gallery.current_filter(), "all");
        assert_eq!(gallery.len(), 6);

        gallery.set_filter(&catalog, "youngtimer");
        assert_eq!(gallery.current_filter(), "youngtimer");
        assert_eq!(gallery.len(), 2);

        gallery.set_filter(&catalog, "does-not-exist");
        assert_eq!(gallery.current_filter(), "does-not-exist");
        assert!(gallery.is_empty());
    }

    #[test]
    fn filtering_does_not_mutate_catalog() {
        let catalog = sample_catalog();
        let before = catalog.photos().to_vec();
        let _ = apply_filter(&catalog, "klassiker");
        assert_eq!(catalog.photos(), before.as_slice());
    }
}
