/// State management module
///
/// This module handles all application state, including:
/// - The fixed artwork catalogue (data.rs, catalog.rs)
/// - Per-item image load status (artwork.rs)
/// - Hero carousel index and cross-fade (carousel.rs)
/// - Lightbox state machine (lightbox.rs)
/// - Scroll reveal flags (reveal.rs)

pub mod artwork;
pub mod carousel;
pub mod catalog;
pub mod data;
pub mod lightbox;
pub mod reveal;
