//! Demo image catalog and the landing page's demo selection

use thiserror::Error;

/// One before/after pair shown in the demo section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoImage {
    pub original: &'static str,
    pub processed: &'static str,
    pub category: &'static str,
}

/// Sample images for the demo section.
///
/// The processed URLs point at the originals until real processed renders
/// are hosted.
pub static DEMO_IMAGES: [DemoImage; 3] = [
    DemoImage {
        original: "https://images.pexels.com/photos/19245168/pexels-photo-19245168.jpeg?auto=compress&cs=tinysrgb&w=600",
        processed: "https://images.pexels.com/photos/19245168/pexels-photo-19245168.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: "Portrait",
    },
    DemoImage {
        original: "https://images.pexels.com/photos/27298415/pexels-photo-27298415.jpeg?auto=compress&cs=tinysrgb&w=600",
        processed: "https://images.pexels.com/photos/27298415/pexels-photo-27298415.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: "Product",
    },
    DemoImage {
        original: "https://images.pexels.com/photos/5195367/pexels-photo-5195367.jpeg?auto=compress&cs=tinysrgb&w=600",
        processed: "https://images.pexels.com/photos/5195367/pexels-photo-5195367.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: "Automotive",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("demo catalog is empty")]
    EmptyCatalog,

    #[error("demo index {index} is out of range (catalog has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Which demo entry the before/after slider is showing.
///
/// The index is always a valid position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSelection {
    catalog: &'static [DemoImage],
    index: usize,
}

impl DemoSelection {
    /// Start at the first entry of `catalog`
    pub fn new(catalog: &'static [DemoImage]) -> Result<Self, DemoError> {
        if catalog.is_empty() {
            return Err(DemoError::EmptyCatalog);
        }
        Ok(Self { catalog, index: 0 })
    }

    /// Select entry `index`; out-of-range indices leave the selection unchanged
    pub fn select(&mut self, index: usize) -> Result<&DemoImage, DemoError> {
        if index >= self.catalog.len() {
            return Err(DemoError::OutOfRange {
                index,
                len: self.catalog.len(),
            });
        }

        self.index = index;
        tracing::debug!(index, category = self.catalog[index].category, "demo selected");
        Ok(&self.catalog[index])
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static DemoImage {
        let catalog = self.catalog;
        &catalog[self.index]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn entries(&self) -> &'static [DemoImage] {
        self.catalog
    }
}

impl Default for DemoSelection {
    fn default() -> Self {
        Self {
            catalog: &DEMO_IMAGES,
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EMPTY: [DemoImage; 0] = [];

    #[test]
    fn test_initial_selection_is_first_entry() {
        let selection = DemoSelection::default();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.current(), &DEMO_IMAGES[0]);
        assert_eq!(selection.entries().len(), 3);
    }

    #[test]
    fn test_select_valid_index() {
        let mut selection = DemoSelection::default();
        let entry = selection.select(2).map(|e| e.category);

        assert_eq!(entry, Ok("Automotive"));
        assert_eq!(selection.index(), 2);
        assert!(selection.is_selected(2));
        assert!(!selection.is_selected(0));
    }

    #[test]
    fn test_select_out_of_range_keeps_state() {
        let mut selection = DemoSelection::default();
        selection.select(1).expect("index 1 exists");

        let err = selection.select(3).unwrap_err();
        assert_eq!(err, DemoError::OutOfRange { index: 3, len: 3 });
        assert_eq!(selection.index(), 1);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert_eq!(DemoSelection::new(&EMPTY), Err(DemoError::EmptyCatalog));
    }

    #[test]
    fn test_any_click_sequence_shows_last_click() {
        let mut selection = DemoSelection::new(&DEMO_IMAGES).expect("catalog is not empty");
        let clicks = [2, 0, 1, 1, 2, 0, 2];

        for click in clicks {
            selection.select(click).expect("valid index");
            assert_eq!(selection.current(), &DEMO_IMAGES[click]);
        }
        assert_eq!(selection.index(), 2);
    }

    #[test]
    fn test_catalog_categories() {
        let categories: Vec<_> = DEMO_IMAGES.iter().map(|d| d.category).collect();
        assert_eq!(categories, vec!["Portrait", "Product", "Automotive"]);
    }
}
