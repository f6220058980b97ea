/// The compiled-in artwork catalogue
use std::path::Path;

use super::data::{Gallery, GalleryError, GalleryItem};

/// (title, year, file name) for every page, in display order
const PAGES: [(&str, &str, &str); 9] = [
    ("Fullmetal Alchemist", "2020", "FMA.jpg"),
    ("Golden Experience Requiem", "2019", "Giorno.jpg"),
    ("Himiko Toga", "2020", "TOGA.jpg"),
    ("Super Saiyan 3", "2019", "SSJ3.jpg"),
    ("Frankenstein", "2019", "FRANK.jpg"),
    ("Edward Elric", "2020", "ED.jpg"),
    ("Josuke Higashikata", "2019", "JOSUKE.jpg"),
    ("Goku", "2019", "GOKU.jpg"),
    ("Jotaro", "2019", "JOTARO.jpg"),
];

/// Build the gallery, resolving file names against the art directory
pub fn builtin(art_dir: &Path) -> Result<Gallery, GalleryError> {
    let items = PAGES
        .iter()
        .map(|(title, year, file)| GalleryItem::new(*title, *year, art_dir.join(file)))
        .collect();

    Gallery::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_nine_pages_in_order() {
        let gallery = builtin(Path::new("art")).unwrap();

        assert_eq!(gallery.len(), 9);
        assert_eq!(gallery.get(0).title, "Fullmetal Alchemist");
        assert_eq!(gallery.get(8).title, "Jotaro");
        assert_eq!(gallery.get(2).source, Path::new("art").join("TOGA.jpg"));
    }
}
