//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use carrot_hop::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, OnceListener, StateTracker};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneManager, SceneTransition};

// World
pub use crate::core::camera::Camera;
pub use crate::core::display::{TextLabel, Viewport};
pub use crate::core::physics::{ArcadePhysics, Body, Vec2};
pub use crate::core::pool::Pool;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Screens {
        Title,
    }

    impl SceneKey for Screens {}

    struct Title;

    impl Scene<Screens> for Title {
        fn update(&mut self, _ctx: &mut GlobalContext<Screens>, _t: f64, _d: f32) {}
    }

    #[test]
    fn scene_manager_is_reachable_from_prelude() {
        let mut manager = SceneManager::new();
        manager.register_scene(Screens::Title, Title);

        assert!(manager.is_registered(Screens::Title));
        assert_eq!(manager.active(), None);
    }
}
