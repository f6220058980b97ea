/// Artwork media module
///
/// This module handles:
/// - Decoding primary images off the UI thread
/// - Generating gallery thumbnails

pub mod loader;

pub use loader::{load_artwork, Artwork, ImageLoadError};
