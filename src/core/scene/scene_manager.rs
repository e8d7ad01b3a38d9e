//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, switching, and lifecycle.
//
// Scenes are stored in a HashMap by key. Exactly one scene is active at a
// time; starting another scene shuts the active one down first.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use super::Scene;

//=== Scene Transition ====================================================

/// Scene switching requests queued by scenes during their update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Shuts down the active scene (if any) and starts the given one.
    ///
    /// Starting the scene that is already active restarts it.
    Start(K),

    /// Shuts down the active scene, leaving none active.
    Stop,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Owns every registered scene and drives the active one.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    default: Option<S>,
    active: Option<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a new scene manager with no scenes and nothing active.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            default: None,
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// The scene is automatically boxed for storage.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use carrot_hop::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Screens { Title }
    /// # impl SceneKey for Screens {}
    /// # struct Title;
    /// # impl Scene<Screens> for Title {
    /// #     fn update(&mut self, _ctx: &mut GlobalContext<Screens>, _t: f64, _d: f32) {}
    /// # }
    /// let mut manager = SceneManager::new();
    /// manager.register_scene(Screens::Title, Title);
    /// ```
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!(target: "scene", "Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and marks it as the one [`start`](Self::start) boots.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        self.register_scene(key, scene);

        if let Some(previous) = self.default.replace(key) {
            if previous != key {
                warn!(target: "scene", "Default scene changed from {:?} to {:?}", previous, key);
            }
        }
        debug!(target: "scene", "Registered scene {:?} as default", key);
    }

    /// Boots the default scene through its full lifecycle.
    pub fn start(&mut self, context: &mut GlobalContext<S>) {
        match self.default {
            Some(initial) => {
                debug!(target: "scene", "Starting scene manager with initial scene: {:?}", initial);
                self.start_internal(initial, context);
            }
            None => warn!(target: "scene", "No default scene registered"),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the key of the active scene.
    pub fn active(&self) -> Option<S> {
        self.active
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the active scene.
    pub fn update(&mut self, context: &mut GlobalContext<S>, time: f64, delta: f32) {
        let Some(key) = self.active else {
            return;
        };

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.update(context, time, delta);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies all queued scene transitions in FIFO order.
    ///
    /// Should be called at the tick boundary after scene updates.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S>) {
        for transition in context.scene_transitions.take() {
            match transition {
                SceneTransition::Start(key) => self.start_internal(key, context),
                SceneTransition::Stop => self.stop_internal(context),
                SceneTransition::Empty => {}
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn start_internal(&mut self, key: S, context: &mut GlobalContext<S>) {
        if !self.scenes.contains_key(&key) {
            warn!(target: "scene", "Attempted to start unregistered scene {:?}", key);
            return;
        }

        self.stop_internal(context);

        debug!(target: "scene", "Starting scene {:?}", key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.init(context);
            scene.preload(context);
            scene.create(context);
        }
        self.active = Some(key);
    }

    fn stop_internal(&mut self, context: &mut GlobalContext<S>) {
        let Some(current) = self.active.take() else {
            return;
        };

        debug!(target: "scene", "Shutting down scene {:?}", current);
        if let Some(scene) = self.scenes.get_mut(&current) {
            scene.shutdown(context);
        }
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Viewport;
    use std::sync::{Arc, Mutex};

    // Mock types for testing
    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    type Journal = Arc<Mutex<Vec<String>>>;

    /// Records every lifecycle call; optionally requests a transition on update.
    struct Recorder {
        name: &'static str,
        journal: Journal,
        on_update: Option<SceneTransition<TestScene>>,
    }

    impl Recorder {
        fn new(name: &'static str, journal: &Journal) -> Self {
            Self { name, journal: Arc::clone(journal), on_update: None }
        }

        fn requesting(mut self, transition: SceneTransition<TestScene>) -> Self {
            self.on_update = Some(transition);
            self
        }

        fn log(&self, hook: &str) {
            self.journal.lock().unwrap().push(format!("{}:{}", self.name, hook));
        }
    }

    impl Scene<TestScene> for Recorder {
        fn init(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.log("init");
        }

        fn preload(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.log("preload");
        }

        fn create(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.log("create");
        }

        fn update(&mut self, context: &mut GlobalContext<TestScene>, _time: f64, _delta: f32) {
            self.log("update");
            if let Some(transition) = self.on_update.take() {
                context.scene_transitions.push(transition);
            }
        }

        fn shutdown(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.log("shutdown");
        }
    }

    fn context() -> GlobalContext<TestScene> {
        GlobalContext::new(Viewport::new(480.0, 640.0))
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.lock().unwrap().clone()
    }

    //--- SceneTransition Tests --------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- SceneManager Tests -----------------------------------------------

    #[test]
    fn start_runs_full_lifecycle_of_default() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_scene(TestScene::B, Recorder::new("b", &journal));
        manager.register_default(TestScene::A, Recorder::new("a", &journal));
        manager.start(&mut ctx);

        assert_eq!(manager.active(), Some(TestScene::A));
        assert_eq!(entries(&journal), vec!["a:init", "a:preload", "a:create"]);
    }

    #[test]
    fn start_without_default_leaves_nothing_active() {
        let mut manager = SceneManager::<TestScene>::new();
        let mut ctx = context();

        manager.start(&mut ctx);
        manager.update(&mut ctx, 0.0, 0.016);

        assert_eq!(manager.active(), None);
    }

    #[test]
    fn update_reaches_only_active_scene() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_default(TestScene::A, Recorder::new("a", &journal));
        manager.register_scene(TestScene::B, Recorder::new("b", &journal));
        manager.start(&mut ctx);
        journal.lock().unwrap().clear();

        manager.update(&mut ctx, 0.0, 0.016);

        assert_eq!(entries(&journal), vec!["a:update"]);
    }

    #[test]
    fn start_transition_shuts_down_then_boots_target() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_default(
            TestScene::A,
            Recorder::new("a", &journal).requesting(SceneTransition::Start(TestScene::B)),
        );
        manager.register_scene(TestScene::B, Recorder::new("b", &journal));
        manager.start(&mut ctx);
        journal.lock().unwrap().clear();

        manager.update(&mut ctx, 0.0, 0.016);
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active(), Some(TestScene::B));
        assert_eq!(
            entries(&journal),
            vec!["a:update", "a:shutdown", "b:init", "b:preload", "b:create"]
        );
        assert!(ctx.scene_transitions.is_empty());
    }

    #[test]
    fn restarting_active_scene_reruns_lifecycle() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_default(
            TestScene::A,
            Recorder::new("a", &journal).requesting(SceneTransition::Start(TestScene::A)),
        );
        manager.start(&mut ctx);
        journal.lock().unwrap().clear();

        manager.update(&mut ctx, 0.0, 0.016);
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active(), Some(TestScene::A));
        assert_eq!(
            entries(&journal),
            vec!["a:update", "a:shutdown", "a:init", "a:preload", "a:create"]
        );
    }

    #[test]
    fn unregistered_target_is_ignored() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_default(TestScene::A, Recorder::new("a", &journal));
        manager.start(&mut ctx);

        ctx.scene_transitions.start(TestScene::C);
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active(), Some(TestScene::A));
        assert!(!manager.is_registered(TestScene::C));
    }

    #[test]
    fn stop_leaves_no_active_scene() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_default(TestScene::A, Recorder::new("a", &journal));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Stop);
        manager.process_transitions(&mut ctx);
        journal.lock().unwrap().clear();
        manager.update(&mut ctx, 0.0, 0.016);

        assert_eq!(manager.active(), None);
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn empty_transition_is_noop() {
        let journal = Journal::default();
        let mut manager = SceneManager::new();
        let mut ctx = context();

        manager.register_default(TestScene::A, Recorder::new("a", &journal));
        manager.start(&mut ctx);
        journal.lock().unwrap().clear();

        ctx.scene_transitions.push(SceneTransition::Empty);
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active(), Some(TestScene::A));
        assert!(entries(&journal).is_empty());
    }
}
