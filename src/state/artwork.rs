/// Per-item image load status
///
/// Tracks whether each primary image has been requested, is still loading,
/// decoded, or failed. Nothing is decoded until something on the page needs
/// it. A failure is recorded once; the fallback placeholder is drawn locally
/// and never retried.
use crate::media::Artwork;

#[derive(Debug, Clone, Default)]
pub enum LoadStatus {
    /// Not requested yet
    #[default]
    Idle,
    /// Decode in flight
    Pending,
    Loaded(Artwork),
    Failed,
}

#[derive(Debug, Clone)]
pub struct ArtworkStore {
    statuses: Vec<LoadStatus>,
}

impl ArtworkStore {
    pub fn new(len: usize) -> Self {
        Self {
            statuses: vec![LoadStatus::Idle; len],
        }
    }

    /// Mark an item as requested. Returns true only if it was idle, meaning
    /// the caller should start the decode.
    pub fn request(&mut self, index: usize) -> bool {
        match self.statuses.get_mut(index) {
            Some(status) if matches!(status, LoadStatus::Idle) => {
                *status = LoadStatus::Pending;
                true
            }
            _ => false,
        }
    }

    pub fn status(&self, index: usize) -> &LoadStatus {
        &self.statuses[index % self.statuses.len()]
    }

    /// Decoded artwork for an item, if it has loaded
    pub fn artwork(&self, index: usize) -> Option<&Artwork> {
        match self.status(index) {
            LoadStatus::Loaded(artwork) => Some(artwork),
            _ => None,
        }
    }

    pub fn load_failed(&self, index: usize) -> bool {
        matches!(self.status(index), LoadStatus::Failed)
    }

    pub fn mark_loaded(&mut self, index: usize, artwork: Artwork) {
        if let Some(status) = self.statuses.get_mut(index) {
            *status = LoadStatus::Loaded(artwork);
        }
    }

    /// Record a failure. Returns true only the first time for an item.
    pub fn mark_failed(&mut self, index: usize) -> bool {
        match self.statuses.get_mut(index) {
            Some(status) if !matches!(status, LoadStatus::Failed) => {
                *status = LoadStatus::Failed;
                true
            }
            _ => false,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|status| matches!(status, LoadStatus::Loaded(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|status| matches!(status, LoadStatus::Failed))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn artwork() -> Artwork {
        let pixels = vec![0u8; 4 * 2 * 2];
        Artwork {
            full: Handle::from_rgba(2, 2, pixels.clone()),
            thumbnail: Handle::from_rgba(2, 2, pixels),
            width: 2,
            height: 2,
        }
    }

    #[test]
    fn test_everything_starts_idle() {
        let store = ArtworkStore::new(3);
        assert!(matches!(store.status(0), LoadStatus::Idle));
        assert!(!store.load_failed(2));
        assert_eq!(store.loaded_count(), 0);
    }

    #[test]
    fn test_request_only_once() {
        let mut store = ArtworkStore::new(3);

        assert!(store.request(1));
        assert!(matches!(store.status(1), LoadStatus::Pending));
        assert!(!store.request(1));

        store.mark_loaded(1, artwork());
        assert!(!store.request(1));
        assert!(!store.request(7));
    }

    #[test]
    fn test_failure_is_one_shot() {
        let mut store = ArtworkStore::new(3);

        assert!(store.mark_failed(1));
        assert!(!store.mark_failed(1));
        assert!(store.load_failed(1));
        assert_eq!(store.failed_count(), 1);
    }

    #[test]
    fn test_loaded_artwork_is_available() {
        let mut store = ArtworkStore::new(2);
        store.mark_loaded(0, artwork());

        assert!(store.artwork(0).is_some());
        assert!(store.artwork(1).is_none());
        assert_eq!(store.loaded_count(), 1);
    }

    #[test]
    fn test_out_of_range_updates_are_ignored() {
        let mut store = ArtworkStore::new(2);
        store.mark_loaded(5, artwork());
        assert!(!store.mark_failed(5));
        assert_eq!(store.loaded_count(), 0);
    }
}
