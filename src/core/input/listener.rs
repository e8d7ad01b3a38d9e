//=========================================================================
// One-Shot Key Listener
//=========================================================================
//
// Edge-triggered listener that fires once per arming.
//
// Flow:
//   arm() → poll() … poll() → fires on first UP→DOWN edge → disarmed
//
// Held keys never fire: only the transition recorded by the state tracker
// during the current frame counts.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== OnceListener ========================================================

/// Fires exactly once on the next press edge of `key`, then disarms itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnceListener {
    key: KeyCode,
    armed: bool,
}

impl OnceListener {
    /// Creates a disarmed listener for `key`.
    pub fn new(key: KeyCode) -> Self {
        Self { key, armed: false }
    }

    /// Creates a listener that is already armed.
    pub fn armed(key: KeyCode) -> Self {
        Self { key, armed: true }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// Returns `true` if the listener fired this frame.
    ///
    /// Firing consumes the listener; later calls return `false` until
    /// it is armed again.
    pub fn poll(&mut self, input: &StateTracker) -> bool {
        if self.armed && input.is_key_pressed(self.key) {
            self.armed = false;
            return true;
        }
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::press(key)
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::release(key)
    }

    #[test]
    fn fires_once_on_press_edge() {
        let mut tracker = StateTracker::new();
        let mut listener = OnceListener::armed(KeyCode::Space);

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(listener.poll(&tracker));
        assert!(!listener.is_armed());

        // Same frame, second poll: already consumed
        assert!(!listener.poll(&tracker));
    }

    #[test]
    fn second_press_ignored_after_firing() {
        let mut tracker = StateTracker::new();
        let mut listener = OnceListener::armed(KeyCode::Space);

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(listener.poll(&tracker));

        tracker.clear();
        tracker.process_events(&[key_up(KeyCode::Space)]);
        tracker.clear();
        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(!listener.poll(&tracker));
    }

    #[test]
    fn held_key_does_not_fire() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::Space)]);
        tracker.clear();

        let mut listener = OnceListener::armed(KeyCode::Space);
        assert!(!listener.poll(&tracker), "Only a fresh edge should fire");
        assert!(listener.is_armed());
    }

    #[test]
    fn disarmed_listener_never_fires() {
        let mut tracker = StateTracker::new();
        let mut listener = OnceListener::new(KeyCode::Space);

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(!listener.poll(&tracker));
    }

    #[test]
    fn other_keys_ignored() {
        let mut tracker = StateTracker::new();
        let mut listener = OnceListener::armed(KeyCode::Space);

        tracker.process_events(&[key_down(KeyCode::Enter)]);
        assert!(!listener.poll(&tracker));
        assert!(listener.is_armed());
        assert_eq!(listener.key(), KeyCode::Space);
    }

    #[test]
    fn rearm_allows_another_fire() {
        let mut tracker = StateTracker::new();
        let mut listener = OnceListener::armed(KeyCode::Space);

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(listener.poll(&tracker));

        listener.arm();
        tracker.clear();
        tracker.process_events(&[key_up(KeyCode::Space), key_down(KeyCode::Space)]);
        assert!(listener.poll(&tracker));

        listener.arm();
        listener.disarm();
        assert!(!listener.poll(&tracker));
    }
}
