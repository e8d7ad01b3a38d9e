//=========================================================================
// Input System
//=========================================================================
//
// Keyboard input for scenes.
//
// Architecture:
//   Platform batches → StateTracker (held keys, edges) → Scene queries
//
// Two query styles:
// - Polled: `StateTracker::is_key_down` each frame (steering)
// - Edge-triggered: `OnceListener::poll` fires once per arming (restart)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod listener;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers};
pub use listener::OnceListener;
pub use state_tracker::StateTracker;
