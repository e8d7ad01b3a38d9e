//=========================================================================
// Game Over Screen
//=========================================================================
//
// Shows "Game Over" and waits for a single Space press to restart.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::SceneId;
use crate::core::display::TextLabel;
use crate::core::globals::GlobalContext;
use crate::core::input::{KeyCode, OnceListener};
use crate::core::scene::Scene;

//=== GameOverScreen ======================================================

const TITLE_FONT_SIZE: f32 = 48.0;

pub struct GameOverScreen {
    title: Option<TextLabel>,
    restart: OnceListener,
}

impl GameOverScreen {
    pub fn new() -> Self {
        Self {
            title: None,
            restart: OnceListener::new(KeyCode::Space),
        }
    }

    /// The centered title, present once the scene has been created.
    pub fn title(&self) -> Option<&TextLabel> {
        self.title.as_ref()
    }

    pub fn is_waiting_for_restart(&self) -> bool {
        self.restart.is_armed()
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId> for GameOverScreen {
    fn create(&mut self, context: &mut GlobalContext<SceneId>) {
        let (x, y) = context.viewport.center();
        self.title = Some(TextLabel::new("Game Over", x, y, TITLE_FONT_SIZE).with_origin(0.5, 0.5));
        self.restart.arm();
        info!(target: "scene", "Game over, press Space to play again");
    }

    fn update(&mut self, context: &mut GlobalContext<SceneId>, _time: f64, _delta: f32) {
        if self.restart.poll(&context.input_state) {
            info!(target: "scene", "Restarting level");
            context.scene_transitions.start(SceneId::Game);
        }
    }

    fn shutdown(&mut self, _context: &mut GlobalContext<SceneId>) {
        self.restart.disarm();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
