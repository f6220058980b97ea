/// Hero carousel: one artwork at a time, advancing on a fixed cadence
///
/// The repeating timer itself lives in the application subscription, so it
/// only exists while the carousel is mounted. This struct just holds the index
/// and the cross-fade bookkeeping.
use std::time::{Duration, Instant};

use super::data::{wrap_next, wrap_prev};

/// Emitted whenever the active item changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChanged(pub usize);

/// Cross-fade from the previous item to the active one
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: usize,
    started_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    delay: Duration,
    speed: Duration,
    transition: Option<Transition>,
}

impl Carousel {
    /// Create a carousel over `len` items (len must be at least 1)
    pub fn new(len: usize, delay: Duration, speed: Duration) -> Self {
        Self {
            len: len.max(1),
            active_index: 0,
            delay,
            speed,
            transition: None,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Interval between automatic advances
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Timer fired: advance to the next item, wrapping at the end
    pub fn tick(&mut self, now: Instant) -> ActiveChanged {
        self.next(now)
    }

    /// Manual advance. Never blocked by a transition in progress.
    pub fn next(&mut self, now: Instant) -> ActiveChanged {
        let target = wrap_next(self.active_index, self.len);
        self.set_active(target, now)
    }

    pub fn prev(&mut self, now: Instant) -> ActiveChanged {
        let target = wrap_prev(self.active_index, self.len);
        self.set_active(target, now)
    }

    /// Jump to a specific item (wrapped into range)
    pub fn go_to(&mut self, index: usize, now: Instant) -> ActiveChanged {
        self.set_active(index % self.len, now)
    }

    fn set_active(&mut self, index: usize, now: Instant) -> ActiveChanged {
        if index != self.active_index {
            self.transition = Some(Transition {
                from: self.active_index,
                started_at: now,
            });
            self.active_index = index;
        }
        ActiveChanged(self.active_index)
    }

    /// The item fading out, while a transition is running
    pub fn previous_index(&self, now: Instant) -> Option<usize> {
        self.transition
            .filter(|_| self.is_transitioning(now))
            .map(|transition| transition.from)
    }

    /// Cross-fade progress in [0, 1]; 1 when no transition is running
    pub fn transition_progress(&self, now: Instant) -> f32 {
        let Some(transition) = self.transition else {
            return 1.0;
        };

        if self.speed.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(transition.started_at);
        (elapsed.as_secs_f32() / self.speed.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition_progress(now) < 1.0
    }
}
