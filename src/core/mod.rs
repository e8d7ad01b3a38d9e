//=========================================================================
// Core Systems Orchestrator
//
// Game-loop driver for the logic thread.
//
// Responsibilities:
// - Own the engine systems (scene manager) and the scene context
// - Feed each tick's input batches into the keyboard state
// - Advance the game clock and update the active scene
// - Keep a fixed tick rate on the logic thread
//
// Notes:
// `tick()` is the whole per-frame pipeline and has no threading in it, so
// tests drive scenes frame by frame through it. `spawn_core_thread()`
// wraps it with platform event collection and pacing.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod display;
pub mod globals;
pub mod input;
pub mod physics;
pub mod pool;
pub mod scene;
pub(crate) mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{info, trace};

//=== Internal Modules ====================================================

use display::Viewport;
use globals::{GlobalContext, GlobalSystems};
use input::InputEvent;
use platform_bridge::{EventCollector, Frame, PlatformEvent};
use scene::SceneKey;

//=== CoreSystemsOrchestrator =============================================

/// Owns engine systems plus scene context and steps them once per tick.
pub struct CoreSystemsOrchestrator<S: SceneKey> {
    systems: GlobalSystems<S>,
    context: GlobalContext<S>,
    elapsed: f64,
}

impl<S: SceneKey> CoreSystemsOrchestrator<S> {
    //--- Construction -----------------------------------------------------

    pub fn new(viewport: Viewport) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(viewport),
            elapsed: 0.0,
        }
    }

    /// Gives mutable access to systems and context for scene registration
    /// and other setup before the loop starts.
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S>, &mut GlobalContext<S>),
    {
        init_fn(&mut self.systems, &mut self.context);
    }

    //--- Frame Pipeline ---------------------------------------------------

    /// Boots the default scene.
    pub fn start(&mut self) {
        self.systems.scene_manager.start(&mut self.context);
    }

    /// Runs one tick: input, scene update, scene transitions.
    pub fn tick(&mut self, input_batches: &[Vec<InputEvent>], delta: f32) {
        self.elapsed += f64::from(delta);
        trace!("Tick at {:.3}s ({} input batches)", self.elapsed, input_batches.len());
        self.systems
            .update(&mut self.context, input_batches, self.elapsed, delta);
    }

    //--- Accessors --------------------------------------------------------

    pub fn systems(&self) -> &GlobalSystems<S> {
        &self.systems
    }

    pub fn context(&self) -> &GlobalContext<S> {
        &self.context
    }

    /// Game time in seconds since the first tick.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread, ticking at a fixed rate (TPS).
    //
    // Each tick:
    //  1. Collects input batches from the platform
    //  2. Runs the frame pipeline
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly when the window closes or the channel drops
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let delta = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let collector = EventCollector::new(receiver);
            self.start();

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                let batches = match collector.next_frame() {
                    Frame::Input(batches) => batches,
                    Frame::Shutdown => {
                        info!("Core thread exiting after {:.1}s of game time", self.elapsed);
                        break;
                    }
                };

                //--- Step 2: Update systems --------------------------------
                self.tick(&batches, delta);

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::scene::Scene;
    use crossbeam_channel::unbounded;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    /// Records `(time, delta, space_down)` for every update.
    struct Recorder {
        frames: Arc<Mutex<Vec<(f64, f32, bool)>>>,
    }

    impl Scene<TestScene> for Recorder {
        fn update(&mut self, context: &mut GlobalContext<TestScene>, time: f64, delta: f32) {
            let space = context.input_state.is_key_down(KeyCode::Space);
            self.frames.lock().unwrap().push((time, delta, space));
        }
    }

    fn orchestrator(frames: &Arc<Mutex<Vec<(f64, f32, bool)>>>) -> CoreSystemsOrchestrator<TestScene> {
        let mut core = CoreSystemsOrchestrator::new(Viewport::new(480.0, 640.0));
        let recorder = Recorder { frames: Arc::clone(frames) };
        core.init_systems(|systems, _context| {
            systems.scene_manager.register_default(TestScene::Main, recorder);
        });
        core
    }

    #[test]
    fn tick_advances_clock_and_updates_scene() {
        let frames = Arc::default();
        let mut core = orchestrator(&frames);
        core.start();

        core.tick(&[], 0.5);
        core.tick(&[], 0.25);

        assert_eq!(core.elapsed(), 0.75);
        assert_eq!(
            *frames.lock().unwrap(),
            vec![(0.5, 0.5, false), (0.75, 0.25, false)]
        );
    }

    #[test]
    fn tick_applies_input_before_update() {
        let frames = Arc::default();
        let mut core = orchestrator(&frames);
        core.start();

        let press = vec![InputEvent::press(KeyCode::Space)];
        core.tick(&[press], 0.1);

        assert!(frames.lock().unwrap()[0].2);
        assert!(core.context().input_state.is_key_pressed(KeyCode::Space));

        core.tick(&[], 0.1);
        assert!(!core.context().input_state.is_key_pressed(KeyCode::Space));
        assert_eq!(core.systems().scene_manager.active(), Some(TestScene::Main));
    }

    #[test]
    fn core_thread_exits_on_window_closed() {
        let frames = Arc::default();
        let core = orchestrator(&frames);
        let (tx, rx) = unbounded();

        let handle = core.spawn_core_thread(rx, 240.0);
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn core_thread_exits_on_disconnect() {
        let frames = Arc::default();
        let core = orchestrator(&frames);
        let (tx, rx) = unbounded::<PlatformEvent>();

        let handle = core.spawn_core_thread(rx, 240.0);
        drop(tx);

        assert!(handle.join().is_ok());
    }
}
