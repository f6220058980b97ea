/// Modal image viewer state machine
///
/// `Closed` is the initial state and can be re-entered any number of times.
/// The keyboard subscription is derived from this state, so it exists exactly
/// while the lightbox is open.
use iced::keyboard::{key::Named, Key};

use super::data::{wrap_next, wrap_prev};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

/// Inputs the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    /// A gallery card was chosen
    Select(usize),
    Next,
    Prev,
    /// Close button or Escape
    Dismiss,
    /// Press on the dimmed area around the image
    BackdropPressed,
    /// Press on the image itself; swallowed so the backdrop never sees it
    ImagePressed,
}

impl Lightbox {
    pub fn open_index(&self) -> Option<usize> {
        match self {
            Lightbox::Open(index) => Some(*index),
            Lightbox::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    /// Number of keyboard listeners this state requires (0 or 1)
    pub fn keyboard_listeners(&self) -> usize {
        usize::from(self.is_open())
    }

    pub fn select(&mut self, index: usize, len: usize) {
        *self = Lightbox::Open(index % len.max(1));
    }

    pub fn next(&mut self, len: usize) {
        if let Lightbox::Open(index) = *self {
            *self = Lightbox::Open(wrap_next(index, len));
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Lightbox::Open(index) = *self {
            *self = Lightbox::Open(wrap_prev(index, len));
        }
    }

    pub fn dismiss(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Apply an event and return the resulting state
    pub fn handle(&mut self, event: LightboxEvent, len: usize) -> Lightbox {
        match event {
            LightboxEvent::Select(index) => self.select(index, len),
            LightboxEvent::Next => self.next(len),
            LightboxEvent::Prev => self.prev(len),
            LightboxEvent::Dismiss | LightboxEvent::BackdropPressed => self.dismiss(),
            LightboxEvent::ImagePressed => {}
        }
        *self
    }

    /// Translate a key press; only meaningful while open
    pub fn key_event(&self, key: &Key) -> Option<LightboxEvent> {
        if !self.is_open() {
            return None;
        }
        key_to_event(key)
    }

    /// Feed a key press through the state machine
    pub fn handle_key(&mut self, key: &Key, len: usize) -> Lightbox {
        if let Some(event) = self.key_event(key) {
            self.handle(event, len);
        }
        *self
    }
}

/// Escape closes, arrows navigate; every other key is ignored
pub fn key_to_event(key: &Key) -> Option<LightboxEvent> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxEvent::Dismiss),
        Key::Named(Named::ArrowRight) => Some(LightboxEvent::Next),
        Key::Named(Named::ArrowLeft) => Some(LightboxEvent::Prev),
        _ => None,
    }
}
