//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and named scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene<S>>>
//     └─ active: Option<S>
//
// Flow:
//   start() → init() → preload() → create()
//   update() → Scene::update(time, delta)
//   process_transitions() → shutdown() old → init/preload/create new
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and per-frame update logic.
///
/// Scenes are registered in [`SceneManager`] and started by key. Starting a
/// scene always runs the full `init → preload → create` sequence, so a scene
/// that is started again rebuilds its state from scratch.
///
/// # Minimal Implementation
///
/// Only `update()` is required:
///
/// ```rust
/// # use carrot_hop::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screens { Title }
/// # impl SceneKey for Screens {}
/// struct Title;
///
/// impl Scene<Screens> for Title {
///     fn update(&mut self, _context: &mut GlobalContext<Screens>, _time: f64, _delta: f32) {}
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// First hook after the scene is started. Reset per-session bookkeeping here.
    fn init(&mut self, _context: &mut GlobalContext<S>) {}

    /// Registers the assets the scene needs (texture keys and dimensions).
    fn preload(&mut self, _context: &mut GlobalContext<S>) {}

    /// Builds the scene's world: entities, colliders, camera, labels.
    fn create(&mut self, _context: &mut GlobalContext<S>) {}

    /// Called once per tick while the scene is active.
    ///
    /// `time` is the elapsed game time in seconds, `delta` the length of
    /// this tick in seconds.
    fn update(&mut self, context: &mut GlobalContext<S>, time: f64, delta: f32);

    /// Called when the manager switches away from this scene.
    fn shutdown(&mut self, _context: &mut GlobalContext<S>) {}
}
