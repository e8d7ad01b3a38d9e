//=========================================================================
// Engine
//
// Wires the two threads of a running game together.
//
// ```text
//  EngineBuilder ─build()─> Engine ─init(register scenes)─> Engine ─run(window)
//                                                                │
//             logic thread: CoreSystemsOrchestrator @ tps  <─────┤ bounded channel
//             main thread:  Platform (winit) blocks here   <─────┘
// ```
//
// `run` returns once the window is closed and the logic thread has been
// joined.
//
//=========================================================================

use crossbeam_channel::bounded;
use log::{error, info};

use crate::config::WindowConfig;
use crate::core::display::Viewport;
use crate::core::globals::{GlobalContext, GlobalSystems};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::scene::SceneKey;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

const DEFAULT_TPS: f64 = 60.0;
const DEFAULT_CHANNEL_CAPACITY: usize = 128;
const DEFAULT_VIEWPORT: (f32, f32) = (480.0, 640.0);

//=== EngineBuilder =======================================================

/// Collects tick rate, channel size, and game size before any thread
/// exists.
///
/// Defaults: 60 ticks per second, 128 queued key batches, a 480x640
/// game area.
///
/// ```no_run
/// use carrot_hop::config::{GameConfig, WindowConfig};
/// use carrot_hop::game::{self, SceneId};
/// use carrot_hop::EngineBuilder;
///
/// let config = GameConfig::default();
///
/// EngineBuilder::<SceneId>::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build()
///     .init(|systems, _context| game::register(systems, &config))
///     .run(WindowConfig::default())
///     .expect("platform failed");
/// ```
pub struct EngineBuilder<S: SceneKey> {
    tps: f64,
    channel_capacity: usize,
    viewport: Viewport,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: SceneKey> EngineBuilder<S> {
    pub fn new() -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        Self {
            tps: DEFAULT_TPS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            viewport: Viewport::new(width, height),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Logic ticks per second. Also fixes the `delta` every scene sees.
    ///
    /// # Panics
    ///
    /// If `tps` is zero or negative.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// How many key batches may wait for the logic thread before the
    /// window thread blocks on send.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Game-space size handed to scenes through `GlobalContext::viewport`.
    ///
    /// # Panics
    ///
    /// If either side is zero or negative.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Viewport must be positive, got {}x{}",
            width,
            height
        );
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn build(self) -> Engine<S> {
        info!(
            "Engine configured: {} tps, {} batch channel, {}x{} game area",
            self.tps, self.channel_capacity, self.viewport.width, self.viewport.height
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.viewport),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<S: SceneKey> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A configured game that has not started running yet.
pub struct Engine<S: SceneKey> {
    orchestrator: CoreSystemsOrchestrator<S>,
    tps: f64,
    channel_capacity: usize,
}

impl<S: SceneKey> Engine<S> {
    /// Gives the caller a chance to register scenes and fill the context
    /// (textures, initial state) on the current thread.
    pub fn init<F>(mut self, register: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S>, &mut GlobalContext<S>),
    {
        self.orchestrator.init_systems(register);
        info!("Scenes registered");
        self
    }

    /// Opens the window and plays until it is closed.
    ///
    /// The logic thread is spawned before the window opens and is joined
    /// before this returns. It stops on `WindowClosed` or when the
    /// platform drops its sender.
    ///
    /// # Errors
    ///
    /// [`PlatformError`] if winit could not create or drive its event loop.
    pub fn run(self, window: WindowConfig) -> Result<(), PlatformError> {
        let (sender, receiver) = bounded::<PlatformEvent>(self.channel_capacity);

        let logic = self.orchestrator.spawn_core_thread(receiver, self.tps);
        info!("Logic thread running at {} tps", self.tps);

        let outcome = Platform::new(sender, window).run();
        match &outcome {
            Ok(()) => info!("Window closed"),
            Err(e) => error!("Platform stopped: {}", e),
        }

        if logic.join().is_err() {
            error!("Logic thread panicked");
        }

        info!("Engine stopped");
        outcome
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
