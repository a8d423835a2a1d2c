//! Button press feedback
//!
//! A pressed button is drawn in its "active" state for a short moment after
//! the click or key press. egui only redraws on input, so the app asks
//! [`PressFeedback::next_deadline`] when the next flash ends and schedules a
//! repaint for exactly that moment. With no flash running nothing is
//! scheduled and egui sleeps until the next event.

use std::time::{Duration, Instant};

/// Flash length for a mouse click.
pub const CLICK_FLASH: Duration = Duration::from_millis(100);

/// Flash length for a key press highlighting its on-screen button.
pub const KEY_FLASH: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
struct Flash<K> {
    key: K,
    until: Instant,
}

/// Tracks which buttons are currently flashing.
#[derive(Debug, Clone)]
pub struct PressFeedback<K> {
    flashes: Vec<Flash<K>>,
    enabled: bool,
}

impl<K: Copy + PartialEq> Default for PressFeedback<K> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<K: Copy + PartialEq> PressFeedback<K> {
    pub fn new(enabled: bool) -> Self {
        Self { flashes: Vec::new(), enabled }
    }

    /// Start (or restart) a flash for `key` lasting `duration` from `now`.
    pub fn flash(&mut self, key: K, duration: Duration, now: Instant) {
        if !self.enabled {
            return;
        }
        let until = now + duration;
        match self.flashes.iter_mut().find(|f| f.key == key) {
            Some(existing) => existing.until = existing.until.max(until),
            None => self.flashes.push(Flash { key, until }),
        }
    }

    pub fn is_active(&self, key: K, now: Instant) -> bool {
        self.flashes.iter().any(|f| f.key == key && f.until > now)
    }

    /// Drop finished flashes.
    pub fn prune(&mut self, now: Instant) {
        self.flashes.retain(|f| f.until > now);
    }

    /// When the earliest running flash ends, if any.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.flashes
            .iter()
            .filter(|f| f.until > now)
            .map(|f| f.until - now)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_expires() {
        let start = Instant::now();
        let mut fb = PressFeedback::new(true);
        fb.flash(3usize, CLICK_FLASH, start);

        assert!(fb.is_active(3, start));
        assert!(fb.is_active(3, start + Duration::from_millis(99)));
        assert!(!fb.is_active(3, start + CLICK_FLASH));
        assert!(!fb.is_active(4, start));

        fb.prune(start + CLICK_FLASH);
        assert!(fb.flashes.is_empty());
        assert_eq!(fb.next_deadline(start + CLICK_FLASH), None);
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let start = Instant::now();
        let mut fb = PressFeedback::new(true);
        fb.flash('a', KEY_FLASH, start);
        fb.flash('b', CLICK_FLASH, start);

        assert_eq!(fb.next_deadline(start), Some(CLICK_FLASH));
        let later = start + Duration::from_millis(120);
        assert_eq!(fb.next_deadline(later), Some(Duration::from_millis(30)));
        assert_eq!(fb.next_deadline(start + KEY_FLASH), None);
    }

    #[test]
    fn test_reflash_extends() {
        let start = Instant::now();
        let mut fb = PressFeedback::new(true);
        fb.flash(1u8, CLICK_FLASH, start);
        fb.flash(1u8, CLICK_FLASH, start + Duration::from_millis(80));

        assert!(fb.is_active(1, start + Duration::from_millis(150)));
        assert_eq!(fb.flashes.len(), 1);
    }

    #[test]
    fn test_disabled_never_flashes() {
        let start = Instant::now();
        let mut fb = PressFeedback::new(false);
        fb.flash(0u8, KEY_FLASH, start);
        assert!(!fb.is_active(0, start));
        assert_eq!(fb.next_deadline(start), None);
    }
}
