//=========================================================================
// State Tracker
//=========================================================================
//
// Per-key keyboard state for the current tick.
//
// Each key the game has seen carries three flags:
//   held      survives across ticks until a KeyUp
//   pressed   set by an UP→DOWN transition, cleared at the next tick
//   released  set by a DOWN→UP transition, cleared at the next tick
//
// Tick lifecycle: clear() → process_events(batch)… → queries
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers};

//=== KeyState ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KeyState {
    held: bool,
    pressed: bool,
    released: bool,
}

//=== StateTracker ========================================================

/// Held keys plus this tick's press/release edges.
#[derive(Debug, Default)]
pub struct StateTracker {
    keys: HashMap<KeyCode, KeyState>,
    modifiers: Modifiers,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    /// Forgets last tick's edges. Held keys stay held.
    pub fn clear(&mut self) {
        for state in self.keys.values_mut() {
            state.pressed = false;
            state.released = false;
        }
    }

    /// Applies a batch of events in order.
    ///
    /// A press and release inside one batch leave both edges set and the
    /// key up, so a quick tap is never lost. A KeyDown for a key that is
    /// already held (OS key repeat) is not a new press.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            let key = event.key();
            let down = matches!(event, InputEvent::KeyDown { .. });
            self.modifiers = event.modifiers();

            let state = self.keys.entry(key).or_default();
            if down && !state.held {
                state.pressed = true;
            } else if !down && state.held {
                state.released = true;
            }
            state.held = down;
        }
    }

    //--- Queries ----------------------------------------------------------

    /// `true` only on the tick the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.state(key).pressed
    }

    /// `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.state(key).held
    }

    /// `true` only on the tick the key went up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.state(key).released
    }

    /// Modifiers reported with the latest key event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn state(&self, key: KeyCode) -> KeyState {
        self.keys.get(&key).copied().unwrap_or_default()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs one tick with `events` and returns the tracker for queries.
    fn tick<'a>(tracker: &'a mut StateTracker, events: &[InputEvent]) -> &'a StateTracker {
        tracker.clear();
        tracker.process_events(events);
        tracker
    }

    #[test]
    fn space_press_is_an_edge_for_one_tick() {
        let mut tracker = StateTracker::new();

        let t = tick(&mut tracker, &[InputEvent::press(KeyCode::Space)]);
        assert!(t.is_key_pressed(KeyCode::Space) && t.is_key_down(KeyCode::Space));

        let t = tick(&mut tracker, &[]);
        assert!(!t.is_key_pressed(KeyCode::Space) && t.is_key_down(KeyCode::Space));

        let t = tick(&mut tracker, &[InputEvent::release(KeyCode::Space)]);
        assert!(t.is_key_released(KeyCode::Space) && !t.is_key_down(KeyCode::Space));

        let t = tick(&mut tracker, &[]);
        assert!(!t.is_key_released(KeyCode::Space));
    }

    #[test]
    fn held_arrow_survives_empty_ticks() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::press(KeyCode::ArrowRight)]);

        for _ in 0..30 {
            assert!(tick(&mut tracker, &[]).is_key_down(KeyCode::ArrowRight));
        }
    }

    #[test]
    fn releasing_one_arrow_keeps_the_other() {
        let mut tracker = StateTracker::new();
        tick(
            &mut tracker,
            &[InputEvent::press(KeyCode::ArrowLeft), InputEvent::press(KeyCode::ArrowRight)],
        );

        let t = tick(&mut tracker, &[InputEvent::release(KeyCode::ArrowLeft)]);

        assert!(!t.is_key_down(KeyCode::ArrowLeft));
        assert!(t.is_key_down(KeyCode::ArrowRight));
    }

    #[test]
    fn tap_within_one_batch_keeps_both_edges() {
        let mut tracker = StateTracker::new();

        let t = tick(
            &mut tracker,
            &[InputEvent::press(KeyCode::Space), InputEvent::release(KeyCode::Space)],
        );

        assert!(t.is_key_pressed(KeyCode::Space));
        assert!(t.is_key_released(KeyCode::Space));
        assert!(!t.is_key_down(KeyCode::Space));
    }

    #[test]
    fn key_repeat_is_not_a_press() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::press(KeyCode::Space)]);

        let t = tick(&mut tracker, &[InputEvent::press(KeyCode::Space)]);

        assert!(!t.is_key_pressed(KeyCode::Space));
        assert!(t.is_key_down(KeyCode::Space));
    }

    #[test]
    fn stray_release_is_not_an_edge() {
        let mut tracker = StateTracker::new();

        let t = tick(&mut tracker, &[InputEvent::release(KeyCode::Escape)]);

        assert!(!t.is_key_released(KeyCode::Escape));
        assert!(!t.is_key_down(KeyCode::Escape));
    }

    #[test]
    fn latest_event_sets_modifiers() {
        let mut tracker = StateTracker::new();

        let t = tick(
            &mut tracker,
            &[InputEvent::KeyDown { key: KeyCode::Enter, modifiers: Modifiers::SHIFT }],
        );

        assert_eq!(t.modifiers(), Modifiers::SHIFT);
    }
}
