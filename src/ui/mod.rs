/// User interface module
///
/// - `page.rs` - the scrolling single-page layout (nav, hero, gallery, about, contact)
/// - `lightbox.rs` - modal viewer overlay
/// - `reveal.rs` - scroll reveal wrapper widget
/// - `placeholder.rs` - canvas-drawn fallback artwork
/// - `style.rs` - shared colors and widget styles

pub mod lightbox;
pub mod page;
pub mod placeholder;
pub mod reveal;
pub mod style;
