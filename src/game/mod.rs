//=========================================================================
// Carrot Hop
//=========================================================================
//
// The game itself: an endless vertical platformer.
//
// Scenes:
// - `SceneId::Game`: the level (default scene)
// - `SceneId::GameOver`: end screen, Space restarts the level
//
// Flow:
//   Game ──(fell below lowest platform)──► GameOver ──(Space)──► Game
//
//=========================================================================

//=== Module Declarations =================================================

mod entities;
mod game_over;
mod level;

//=== Public API ==========================================================

pub use entities::{wrap_horizontal, Carrot, Platform, Player};
pub use game_over::GameOverScreen;
pub use level::PlatformerLevel;

//=== Internal Dependencies ===============================================

use std::fmt;

use crate::config::GameConfig;
use crate::core::globals::GlobalSystems;
use crate::core::scene::SceneKey;

//=== SceneId =============================================================

/// Scene keys of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Game,
    GameOver,
}

impl SceneKey for SceneId {}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game => write!(f, "game"),
            Self::GameOver => write!(f, "game-over"),
        }
    }
}

//=== Registration ========================================================

/// Registers both scenes, with the level as the default scene.
pub fn register(systems: &mut GlobalSystems<SceneId>, config: &GameConfig) {
    systems
        .scene_manager
        .register_default(SceneId::Game, PlatformerLevel::new(config));
    systems
        .scene_manager
        .register_scene(SceneId::GameOver, GameOverScreen::new());
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntRange;
    use crate::core::display::Viewport;
    use crate::core::globals::GlobalContext;
    use crate::core::input::{InputEvent, KeyCode};

    const DT: f32 = 1.0 / 60.0;

    fn tick(
        systems: &mut GlobalSystems<SceneId>,
        context: &mut GlobalContext<SceneId>,
        frame: &mut u32,
        batches: &[Vec<InputEvent>],
    ) {
        *frame += 1;
        systems.update(context, batches, f64::from(*frame) * f64::from(DT), DT);
    }

    #[test]
    fn register_makes_level_default() {
        let mut systems = GlobalSystems::new();
        let mut context = GlobalContext::new(Viewport::new(480.0, 640.0));
        register(&mut systems, &GameConfig::default());

        assert!(systems.scene_manager.is_registered(SceneId::Game));
        assert!(systems.scene_manager.is_registered(SceneId::GameOver));

        systems.scene_manager.start(&mut context);
        assert_eq!(systems.scene_manager.active(), Some(SceneId::Game));
        assert!(context.textures.contains("platform"));
    }

    #[test]
    fn falling_leads_to_game_over_and_space_restarts() {
        // Platforms far off to the side: nothing to land on.
        let mut config = GameConfig { seed: Some(3), ..GameConfig::default() };
        config.level.platform_x_range = IntRange::new(2000, 2000);

        let mut systems = GlobalSystems::new();
        let mut context = GlobalContext::new(Viewport::new(480.0, 640.0));
        register(&mut systems, &config);
        systems.scene_manager.start(&mut context);

        let mut frame = 0;
        while systems.scene_manager.active() == Some(SceneId::Game) && frame < 600 {
            tick(&mut systems, &mut context, &mut frame, &[]);
        }
        assert_eq!(systems.scene_manager.active(), Some(SceneId::GameOver));

        // Idle frames do not restart.
        tick(&mut systems, &mut context, &mut frame, &[]);
        assert_eq!(systems.scene_manager.active(), Some(SceneId::GameOver));

        let space = vec![InputEvent::press(KeyCode::Space)];
        tick(&mut systems, &mut context, &mut frame, &[space]);
        assert_eq!(systems.scene_manager.active(), Some(SceneId::Game));
    }

    #[test]
    fn scene_id_display() {
        assert_eq!(SceneId::Game.to_string(), "game");
        assert_eq!(SceneId::GameOver.to_string(), "game-over");
    }
}
