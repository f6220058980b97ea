/// Scroll-triggered reveal bookkeeping
///
/// Each block on the page starts hidden and fades up the first time enough of
/// it scrolls into view. Entry is one-way: once a block has been revealed it
/// stays revealed.
use std::collections::HashMap;
use std::time::{Duration, Instant};

use iced::Rectangle;

/// Every revealable block on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    HeroCopy,
    HeroSpotlight,
    GalleryHead,
    GalleryGrid,
    About,
    AboutCard,
    Contact,
    Footer,
}

/// Resting presentation of a block: fully opaque, no offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    /// Downward offset in logical pixels
    pub offset: f32,
}

/// Fraction of `bounds` covered by `viewport`, in [0, 1]
pub fn visible_fraction(bounds: Rectangle, viewport: Rectangle) -> f32 {
    let area = bounds.width * bounds.height;
    if area <= 0.0 {
        return 0.0;
    }

    bounds
        .intersection(&viewport)
        .map(|visible| (visible.width * visible.height / area).clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

/// Cubic ease-out
fn ease_out(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

#[derive(Debug, Clone)]
pub struct RevealSet {
    entered: HashMap<Section, Instant>,
    threshold: f32,
    duration: Duration,
    offset: f32,
}

impl RevealSet {
    pub fn new(threshold: f32, duration: Duration, offset: f32) -> Self {
        Self {
            entered: HashMap::new(),
            threshold,
            duration,
            offset,
        }
    }

    /// Minimum visible fraction that counts as entering the viewport
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Mark a section as entered. Returns false if it had already entered.
    pub fn enter(&mut self, section: Section, now: Instant) -> bool {
        if self.entered.contains_key(&section) {
            return false;
        }
        self.entered.insert(section, now);
        true
    }

    pub fn has_entered(&self, section: Section) -> bool {
        self.entered.contains_key(&section)
    }

    /// Current opacity and offset for a section
    pub fn presentation(&self, section: Section, now: Instant) -> Presentation {
        let Some(entered_at) = self.entered.get(&section) else {
            return Presentation {
                opacity: 0.0,
                offset: self.offset,
            };
        };

        let t = if self.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(*entered_at).as_secs_f32() / self.duration.as_secs_f32()
        };
        let eased = ease_out(t);

        Presentation {
            opacity: eased,
            offset: self.offset * (1.0 - eased),
        }
    }

    /// Whether any section is still mid-animation
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entered
            .values()
            .any(|entered_at| now.saturating_duration_since(*entered_at) < self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Section; 8] = [
        Section::HeroCopy,
        Section::HeroSpotlight,
        Section::GalleryHead,
        Section::GalleryGrid,
        Section::About,
        Section::AboutCard,
        Section::Contact,
        Section::Footer,
    ];

    fn reveals() -> RevealSet {
        RevealSet::new(0.2, Duration::from_millis(600), 24.0)
    }

    #[test]
    fn test_visible_fraction() {
        let viewport = Rectangle::new(iced::Point::new(0.0, 0.0), iced::Size::new(800.0, 600.0));

        let inside = Rectangle::new(iced::Point::new(10.0, 10.0), iced::Size::new(100.0, 100.0));
        assert_eq!(visible_fraction(inside, viewport), 1.0);

        // Bottom 10% of the block pokes into view
        let peeking = Rectangle::new(iced::Point::new(0.0, 590.0), iced::Size::new(100.0, 100.0));
        assert!((visible_fraction(peeking, viewport) - 0.1).abs() < 1e-4);

        let below = Rectangle::new(iced::Point::new(0.0, 900.0), iced::Size::new(100.0, 100.0));
        assert_eq!(visible_fraction(below, viewport), 0.0);

        let empty = Rectangle::new(iced::Point::new(0.0, 0.0), iced::Size::new(0.0, 100.0));
        assert_eq!(visible_fraction(empty, viewport), 0.0);
    }

    #[test]
    fn test_threshold_against_measured_fraction() {
        let reveals = reveals();
        let viewport = Rectangle::new(iced::Point::new(0.0, 0.0), iced::Size::new(800.0, 600.0));

        // 10% visible: not yet
        let low = Rectangle::new(iced::Point::new(0.0, 590.0), iced::Size::new(100.0, 100.0));
        assert!(visible_fraction(low, viewport) < reveals.threshold());

        // 20% visible: enters
        let enough = Rectangle::new(iced::Point::new(0.0, 580.0), iced::Size::new(100.0, 100.0));
        assert!(visible_fraction(enough, viewport) >= reveals.threshold());
    }

    #[test]
    fn test_entry_is_monotonic() {
        let mut reveals = reveals();
        let now = Instant::now();

        assert!(reveals.enter(Section::Contact, now));
        assert!(!reveals.enter(Section::Contact, now + Duration::from_secs(1)));

        // Still revealed later on, whatever the scroll position
        assert!(reveals.has_entered(Section::Contact));
        let later = reveals.presentation(Section::Contact, now + Duration::from_secs(5));
        assert_eq!(later, Presentation { opacity: 1.0, offset: 0.0 });
    }

    #[test]
    fn test_sections_are_independent() {
        let mut reveals = reveals();
        reveals.enter(Section::GalleryGrid, Instant::now());

        for section in ALL {
            assert_eq!(reveals.has_entered(section), section == Section::GalleryGrid);
        }
    }

    #[test]
    fn test_presentation_interpolates_to_rest() {
        let mut reveals = reveals();
        let now = Instant::now();

        let hidden = reveals.presentation(Section::Footer, now);
        assert_eq!(hidden, Presentation { opacity: 0.0, offset: 24.0 });

        reveals.enter(Section::Footer, now);
        let start = reveals.presentation(Section::Footer, now);
        assert_eq!(start.opacity, 0.0);

        let mid = reveals.presentation(Section::Footer, now + Duration::from_millis(300));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.offset > 0.0 && mid.offset < 24.0);
        assert!(reveals.is_animating(now + Duration::from_millis(300)));

        let rest = reveals.presentation(Section::Footer, now + Duration::from_millis(600));
        assert_eq!(rest, Presentation { opacity: 1.0, offset: 0.0 });
        assert!(!reveals.is_animating(now + Duration::from_millis(600)));
    }
}
