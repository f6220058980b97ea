/// Artwork loader
///
/// Decodes a primary image from disk on a blocking worker thread and turns it
/// into GPU-ready handles: the full-size image for the hero and lightbox, and
/// a downscaled thumbnail for the gallery grid.
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;
use thiserror::Error;
use tokio::task;

/// Longest edge of generated gallery thumbnails
pub const THUMBNAIL_EDGE: u32 = 480;

/// Why a primary image could not be shown
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImageLoadError {
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("loader task failed: {0}")]
    Join(String),
}

/// Decoded artwork, ready to hand to iced image widgets
#[derive(Debug, Clone)]
pub struct Artwork {
    pub full: Handle,
    pub thumbnail: Handle,
    pub width: u32,
    pub height: u32,
}

/// Load and decode an artwork without blocking the UI thread
pub async fn load_artwork(path: PathBuf) -> Result<Artwork, ImageLoadError> {
    // Spawn blocking because decoding and resizing are CPU-intensive
    task::spawn_blocking(move || load_artwork_blocking(&path))
        .await
        .map_err(|e| ImageLoadError::Join(e.to_string()))?
}

/// Blocking implementation of artwork loading
fn load_artwork_blocking(path: &Path) -> Result<Artwork, ImageLoadError> {
    if !path.exists() {
        return Err(ImageLoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| ImageLoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| ImageLoadError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let full = decoded.to_rgba8();
    let (width, height) = full.dimensions();

    // Only shrink; small scans are used as-is
    let thumbnail = if width.max(height) > THUMBNAIL_EDGE {
        decoded
            .resize(THUMBNAIL_EDGE, THUMBNAIL_EDGE, FilterType::Lanczos3)
            .to_rgba8()
    } else {
        full.clone()
    };

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        thumbnail_width = thumbnail.width(),
        thumbnail_height = thumbnail.height(),
        "decoded artwork"
    );

    Ok(Artwork {
        thumbnail: Handle::from_rgba(thumbnail.width(), thumbnail.height(), thumbnail.into_raw()),
        full: Handle::from_rgba(width, height, full.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([27, 27, 29, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.jpg");

        let result = load_artwork(path.clone()).await;
        assert_eq!(result.unwrap_err(), ImageLoadError::NotFound(path));
    }

    #[tokio::test]
    async fn test_garbage_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_artwork(path).await;
        assert!(matches!(result, Err(ImageLoadError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_large_image_gets_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "page.png", 900, 1200);

        let artwork = load_artwork(path).await.unwrap();
        assert_eq!((artwork.width, artwork.height), (900, 1200));
    }

    #[test]
    fn test_small_image_loads_blocking() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "tiny.png", 4, 3);

        let artwork = load_artwork_blocking(&path).unwrap();
        assert_eq!((artwork.width, artwork.height), (4, 3));
    }
}
