//=========================================================================
// Global Context
//
// The mutable world every scene hook receives.
//
//=========================================================================

use crate::core::display::{TextureCache, Viewport};
use crate::core::input::StateTracker;
use crate::core::scene::{SceneKey, TransitionQueue};

//=== GlobalContext =======================================================

pub struct GlobalContext<S: SceneKey> {
    /// Held keys and this tick's press/release edges.
    pub input_state: StateTracker,

    /// Scene changes to apply after the current update.
    pub scene_transitions: TransitionQueue<S>,

    /// Texture sizes registered by `preload` hooks. Survives scene
    /// switches, so a restarted level finds its textures already there.
    pub textures: TextureCache,

    /// Game-space size scenes lay themselves out against.
    pub viewport: Viewport,
}

impl<S: SceneKey> GlobalContext<S> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            input_state: StateTracker::new(),
            scene_transitions: TransitionQueue::new(),
            textures: TextureCache::new(),
            viewport,
        }
    }
}
