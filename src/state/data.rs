/// Shared data structures for the application state
///
/// These structs represent the fixed artwork catalogue that flows
/// between the loading layer and the UI layer.
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while assembling the gallery
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("a gallery needs at least one item")]
    Empty,
    #[error("duplicate gallery title: {0}")]
    DuplicateTitle(String),
}

/// Generated stand-in artwork, drawn when the primary image cannot be shown
///
/// Everything here is derived from the item title, so two items with the
/// same title always produce the same placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Text centered on the card
    pub label: String,
    /// Logical canvas size (width, height), a 3:4 portrait card
    pub size: (f32, f32),
    /// Distance of the frame from the card edge
    pub inset: f32,
    /// Frame stroke width
    pub stroke_width: f32,
    /// Label font size at full card size
    pub font_size: f32,
    /// Card fill, #f4f1eb
    pub paper: [u8; 3],
    /// Frame and label color, #1b1b1d
    pub ink: [u8; 3],
}

impl Placeholder {
    /// Derive the placeholder for an item title
    pub fn for_title(title: &str) -> Self {
        Self {
            label: title.to_string(),
            size: (900.0, 1200.0),
            inset: 40.0,
            stroke_width: 3.0,
            font_size: 42.0,
            paper: [0xf4, 0xf1, 0xeb],
            ink: [0x1b, 0x1b, 0x1d],
        }
    }
}

/// A single artwork in the portfolio
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Display name, unique within the gallery
    pub title: String,
    /// Display label (e.g., "2019")
    pub year: String,
    /// Full path to the primary image
    pub source: PathBuf,
    /// Stand-in used when the primary image fails to load
    pub fallback: Placeholder,
}

impl GalleryItem {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        let title = title.into();
        let fallback = Placeholder::for_title(&title);
        Self {
            title,
            year: year.into(),
            source: source.into(),
            fallback,
        }
    }

    /// Accessible description, "Title (Year)"
    pub fn alt_text(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// What should be drawn for an item right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplaySource<'a> {
    Primary(&'a Path),
    Fallback(&'a Placeholder),
}

/// Pick the resource to display for an item.
///
/// `load_failed` is a one-shot flag set by the loader; there is no retry.
pub fn displayed_source(item: &GalleryItem, load_failed: bool) -> DisplaySource<'_> {
    if load_failed {
        DisplaySource::Fallback(&item.fallback)
    } else {
        DisplaySource::Primary(&item.source)
    }
}

/// Step forward with wraparound
pub fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Step backward with wraparound
pub fn wrap_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// The fixed, ordered, non-empty list of artworks
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::Empty);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.title.as_str()) {
                return Err(GalleryError::DuplicateTitle(item.title.clone()));
            }
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get an item by index, wrapping out-of-range indices
    pub fn get(&self, index: usize) -> &GalleryItem {
        &self.items[index % self.items.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| GalleryItem::new(format!("Page {}", i), "2020", format!("art/{}.jpg", i)))
            .collect()
    }

    #[test]
    fn test_empty_gallery_rejected() {
        assert_eq!(Gallery::new(Vec::new()).unwrap_err(), GalleryError::Empty);
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let mut list = items(3);
        list.push(GalleryItem::new("Page 1", "2021", "art/other.jpg"));

        let err = Gallery::new(list).unwrap_err();
        assert_eq!(err, GalleryError::DuplicateTitle("Page 1".to_string()));
    }

    #[test]
    fn test_next_wraps_back_after_len_steps() {
        for len in 1..=12 {
            for start in 0..len {
                let mut index = start;
                for _ in 0..len {
                    index = wrap_next(index, len);
                    assert!(index < len);
                }
                assert_eq!(index, start, "len={} start={}", len, start);
            }
        }
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for len in 1..=12 {
            for i in 0..len {
                assert_eq!(wrap_prev(wrap_next(i, len), len), i);
                assert_eq!(wrap_next(wrap_prev(i, len), len), i);
            }
        }
    }

    #[test]
    fn test_fallback_is_derived_from_title() {
        let a = GalleryItem::new("Goku", "2019", "art/GOKU.jpg");
        let b = GalleryItem::new("Goku", "2024", "elsewhere/goku.png");

        assert_eq!(a.fallback, b.fallback);
        assert_eq!(a.fallback.label, "Goku");
        assert_ne!(a.fallback, GalleryItem::new("Jotaro", "2019", "x").fallback);
    }

    #[test]
    fn test_displayed_source_switches_on_failure() {
        let item = GalleryItem::new("Goku", "2019", "art/GOKU.jpg");

        assert_eq!(
            displayed_source(&item, false),
            DisplaySource::Primary(Path::new("art/GOKU.jpg"))
        );
        assert_eq!(displayed_source(&item, true), DisplaySource::Fallback(&item.fallback));
    }

    #[test]
    fn test_alt_text() {
        let item = GalleryItem::new("Himiko Toga", "2020", "art/TOGA.jpg");
        assert_eq!(item.alt_text(), "Himiko Toga (2020)");
    }

    #[test]
    fn test_get_wraps_out_of_range_indices() {
        let gallery = Gallery::new(items(4)).unwrap();

        assert_eq!(gallery.len(), 4);
        assert_eq!(gallery.get(3).title, "Page 3");
        assert_eq!(gallery.get(5).title, "Page 1");
    }
}
