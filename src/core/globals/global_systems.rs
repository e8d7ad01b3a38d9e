//=========================================================================
// Global Systems
//
// One logic tick, minus the clock: fold the tick's key batches into the
// keyboard state, update the active scene, then apply whatever scene
// changes that update asked for.
//
//=========================================================================

use super::GlobalContext;
use crate::core::input::InputEvent;
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

pub struct GlobalSystems<S: SceneKey> {
    pub scene_manager: SceneManager<S>,
}

impl<S: SceneKey> GlobalSystems<S> {
    pub fn new() -> Self {
        Self {
            scene_manager: SceneManager::new(),
        }
    }

    /// Runs one tick against `context`.
    ///
    /// Last tick's press/release edges are cleared before the new batches
    /// are applied, so an edge is visible to exactly one scene update.
    pub fn update(
        &mut self,
        context: &mut GlobalContext<S>,
        input_batches: &[Vec<InputEvent>],
        time: f64,
        delta: f32,
    ) {
        context.input_state.clear();
        for batch in input_batches {
            context.input_state.process_events(batch);
        }

        self.scene_manager.update(context, time, delta);
        self.scene_manager.process_transitions(context);
    }
}

impl<S: SceneKey> Default for GlobalSystems<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Viewport;
    use crate::core::input::KeyCode;
    use crate::core::scene::Scene;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Screen {
        Title,
        Play,
    }

    impl SceneKey for Screen {}

    /// Leaves the title screen on a Space press.
    struct Title;

    impl Scene<Screen> for Title {
        fn update(&mut self, ctx: &mut GlobalContext<Screen>, _time: f64, _delta: f32) {
            if ctx.input_state.is_key_pressed(KeyCode::Space) {
                ctx.scene_transitions.start(Screen::Play);
            }
        }
    }

    struct Play;

    impl Scene<Screen> for Play {
        fn update(&mut self, _ctx: &mut GlobalContext<Screen>, _time: f64, _delta: f32) {}
    }

    fn setup() -> (GlobalSystems<Screen>, GlobalContext<Screen>) {
        let mut systems = GlobalSystems::new();
        let mut context = GlobalContext::new(Viewport::new(480.0, 640.0));
        systems.scene_manager.register_default(Screen::Title, Title);
        systems.scene_manager.register_scene(Screen::Play, Play);
        systems.scene_manager.start(&mut context);
        (systems, context)
    }

    #[test]
    fn press_seen_by_scene_switches_in_same_tick() {
        let (mut systems, mut context) = setup();

        systems.update(&mut context, &[vec![InputEvent::press(KeyCode::Space)]], 0.0, 1.0 / 60.0);

        assert_eq!(systems.scene_manager.active(), Some(Screen::Play));
        assert!(context.scene_transitions.is_empty());
    }

    #[test]
    fn edges_last_one_tick() {
        let (mut systems, mut context) = setup();
        systems.update(&mut context, &[vec![InputEvent::press(KeyCode::ArrowLeft)]], 0.0, 1.0 / 60.0);
        assert!(context.input_state.is_key_pressed(KeyCode::ArrowLeft));

        systems.update(&mut context, &[], 0.016, 1.0 / 60.0);

        assert!(!context.input_state.is_key_pressed(KeyCode::ArrowLeft));
        assert!(context.input_state.is_key_down(KeyCode::ArrowLeft));
    }
}
