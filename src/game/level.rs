//=========================================================================
// Platformer Level
//=========================================================================
//
// The endless climb: bounce on platforms, collect carrots, don't fall.
//
// Architecture:
//   create()  → platforms, starter carrots, player, camera, score label
//   update()  → physics → collisions → carrot pickups → gameplay → camera
//
// Gameplay steps inside update (in order):
//   1. Recycle platforms that scrolled below the view to just above it,
//      each with a fresh carrot
//   2. Jump on ground contact
//   3. Horizontal steering
//   4. Horizontal wrap
//   5. Cull carrots that fell below the view
//   6. Game over once the player drops under the lowest platform
//
// Notes:
// Platforms never leave their slot; recycling moves them. The platform
// count therefore stays constant for the whole session, and each slot
// owns at most one live carrot.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::entities::{wrap_horizontal, Carrot, Platform, Player};
use super::SceneId;
use crate::config::{GameConfig, HorizontalControl, IntRange, LevelConfig};
use crate::core::camera::Camera;
use crate::core::display::{TextLabel, TextureInfo, Viewport};
use crate::core::globals::GlobalContext;
use crate::core::input::{KeyCode, StateTracker};
use crate::core::physics::{ArcadePhysics, Vec2};
use crate::core::pool::Pool;
use crate::core::scene::Scene;

//=== Constants ===========================================================

const SCORE_FONT_SIZE: f32 = 24.0;
const SCORE_TOP: f32 = 10.0;

//=== PlatformerLevel =====================================================

pub struct PlatformerLevel {
    config: LevelConfig,
    physics: ArcadePhysics,
    textures: Vec<TextureInfo>,
    seed: Option<u64>,
    rng: StdRng,

    viewport: Viewport,
    player: Player,
    platforms: Vec<Platform>,
    carrots: Pool<Carrot>,
    carrot_size: (f32, f32),
    camera: Camera,

    score: u32,
    score_label: TextLabel,
}

impl PlatformerLevel {
    pub fn new(config: &GameConfig) -> Self {
        let viewport = Viewport::new(config.window.width, config.window.height);
        let (start_x, start_y) = config.level.player_start;

        Self {
            config: config.level.clone(),
            physics: ArcadePhysics::new(config.physics.gravity),
            textures: config.textures.clone(),
            seed: config.seed,
            rng: session_rng(config.seed),
            viewport,
            player: Player::new(Vec2::new(start_x, start_y), (0.0, 0.0)),
            platforms: Vec::new(),
            carrots: Pool::new(),
            carrot_size: (0.0, 0.0),
            camera: Camera::new(viewport),
            score: 0,
            score_label: score_label(viewport, 0),
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Carrots collected this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_label(&self) -> &TextLabel {
        &self.score_label
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn carrots(&self) -> &Pool<Carrot> {
        &self.carrots
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    //--- World Building ---------------------------------------------------

    fn build_platforms(&mut self, display_size: (f32, f32)) {
        self.platforms.clear();
        for i in 0..self.config.platform_count {
            let x = sample(&mut self.rng, self.config.platform_x_range);
            let y = self.config.platform_spacing * i as f32;
            self.platforms.push(Platform::new(Vec2::new(x, y), display_size));

            if i % 2 == 1 {
                self.add_carrot_above(i);
            }
        }
    }

    /// Spawns a carrot for platform slot `index`, releasing the carrot the
    /// slot already owns. Returns the carrot's pool index.
    fn add_carrot_above(&mut self, index: usize) -> Option<usize> {
        let spawn = self.platforms.get(index)?.carrot_spawn_point();

        let previous: Vec<usize> = self
            .carrots
            .iter_active()
            .filter(|(_, carrot)| carrot.anchor == index)
            .map(|(slot, _)| slot)
            .collect();
        for slot in previous {
            self.release_carrot(slot);
        }

        let size = self.carrot_size;
        let slot = self.carrots.acquire(
            || Carrot::new(spawn, size, index),
            |carrot| carrot.respawn(spawn, size, index),
        );
        debug!(target: "level", "Carrot {} spawned above platform {} at ({:.0}, {:.0})", slot, index, spawn.x, spawn.y);
        Some(slot)
    }

    fn release_carrot(&mut self, slot: usize) {
        if self.carrots.kill_and_hide(slot) {
            if let Some(carrot) = self.carrots.get_mut(slot) {
                carrot.body.enabled = false;
            }
        }
    }

    /// Removes a live carrot and scores it. Returns `false` if the carrot
    /// was already gone.
    fn collect_carrot(&mut self, slot: usize) -> bool {
        if !self.carrots.is_active(slot) {
            return false;
        }
        self.release_carrot(slot);
        self.score += 1;
        self.score_label.set_text(score_text(self.score));
        info!(target: "level", "Carrot collected, score {}", self.score);
        true
    }

    //--- Frame Steps ------------------------------------------------------

    fn step_physics(&mut self, delta: f32) {
        let physics = self.physics;

        physics.step(&mut self.player.body, delta);
        for (_, carrot) in self.carrots.iter_active_mut() {
            physics.step(&mut carrot.body, delta);
        }

        for platform in &self.platforms {
            physics.collide(&mut self.player.body, &platform.body);
        }
        for (_, carrot) in self.carrots.iter_active_mut() {
            for platform in &self.platforms {
                physics.collide(&mut carrot.body, &platform.body);
            }
        }

        let picked: Vec<usize> = self
            .carrots
            .iter_active()
            .filter(|(_, carrot)| physics.overlaps(&self.player.body, &carrot.body))
            .map(|(slot, _)| slot)
            .collect();
        for slot in picked {
            self.collect_carrot(slot);
        }
    }

    fn recycle_platforms(&mut self) {
        let scroll_y = self.camera.scroll_y();

        for index in 0..self.platforms.len() {
            let platform = &mut self.platforms[index];
            if platform.y() < scroll_y + self.config.recycle_threshold {
                continue;
            }

            let y = scroll_y - sample(&mut self.rng, self.config.recycle_gap);
            let x = platform.x();
            platform.move_to(Vec2::new(x, y));
            debug!(target: "level", "Platform {} recycled to y {:.0}", index, y);

            self.add_carrot_above(index);
        }
    }

    fn jump_if_grounded(&mut self) {
        if self.player.is_grounded() {
            self.player.body.velocity.y = self.config.jump_velocity;
        }
    }

    fn steer(&mut self, input: &StateTracker) {
        let allowed = match self.config.horizontal_control {
            HorizontalControl::AirborneOnly => !self.player.is_grounded(),
            HorizontalControl::Always => true,
        };

        self.player.body.velocity.x = if !allowed {
            0.0
        } else if input.is_key_down(KeyCode::ArrowLeft) {
            -self.config.move_speed
        } else if input.is_key_down(KeyCode::ArrowRight) {
            self.config.move_speed
        } else {
            0.0
        };
    }

    fn wrap_player(&mut self) {
        let body = &mut self.player.body;
        body.position.x = wrap_horizontal(
            body.position.x,
            self.player.display_size.0,
            self.viewport.width,
        );
    }

    fn cull_carrots(&mut self) {
        let limit = self.camera.scroll_y() + self.config.recycle_threshold;

        let fallen: Vec<usize> = self
            .carrots
            .iter_active()
            .filter(|(_, carrot)| carrot.body.position.y > limit + carrot.display_size.1)
            .map(|(slot, _)| slot)
            .collect();
        for slot in fallen {
            debug!(target: "level", "Carrot {} fell out of view", slot);
            self.release_carrot(slot);
        }
    }

    fn is_game_over(&self) -> bool {
        find_bottom_most_platform(&self.platforms).is_some_and(|index| {
            self.player.position().y > self.platforms[index].y() + self.config.game_over_margin
        })
    }
}

//=== Scene Lifecycle =====================================================

impl Scene<SceneId> for PlatformerLevel {
    fn init(&mut self, _context: &mut GlobalContext<SceneId>) {
        info!(target: "level", "Level starting (seed: {:?})", self.seed);
    }

    fn preload(&mut self, context: &mut GlobalContext<SceneId>) {
        for texture in &self.textures {
            context.textures.insert(texture.clone());
        }
    }

    fn create(&mut self, context: &mut GlobalContext<SceneId>) {
        self.viewport = context.viewport;
        self.rng = session_rng(self.seed);
        self.score = 0;
        self.score_label = score_label(self.viewport, 0);

        self.carrots.clear();
        self.carrot_size = context.textures.display_size("carrot", self.config.carrot_scale);

        let platform_size = context.textures.display_size("platform", self.config.platform_scale);
        self.build_platforms(platform_size);

        let (x, y) = self.config.player_start;
        let player_size = context.textures.display_size("bunny-stand", self.config.player_scale);
        self.player = Player::new(Vec2::new(x, y), player_size);

        self.camera = Camera::new(self.viewport);
        self.camera
            .set_deadzone(self.viewport.width * self.config.deadzone_factor, 0.0);
        self.camera.start_follow(self.player.position());

        info!(
            target: "level",
            "Level created: {} platforms, {} carrots",
            self.platforms.len(),
            self.carrots.count_active()
        );
    }

    fn update(&mut self, context: &mut GlobalContext<SceneId>, _time: f64, delta: f32) {
        self.step_physics(delta);

        self.recycle_platforms();
        self.jump_if_grounded();
        self.steer(&context.input_state);
        self.wrap_player();
        self.cull_carrots();

        if self.is_game_over() {
            info!(target: "level", "Player fell, game over with {} carrots", self.score);
            context.scene_transitions.start(SceneId::GameOver);
        }

        self.camera.follow(self.player.position());
    }

    fn shutdown(&mut self, _context: &mut GlobalContext<SceneId>) {
        debug!(target: "level", "Level shut down at score {}", self.score);
    }
}

//=== Helpers =============================================================

fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform integer from an inclusive range, tolerating reversed bounds.
fn sample(rng: &mut impl Rng, range: IntRange) -> f32 {
    let (low, high) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };
    rng.gen_range(low..=high) as f32
}

/// Index of the platform with the largest y. Ties go to the earliest slot.
fn find_bottom_most_platform(platforms: &[Platform]) -> Option<usize> {
    platforms
        .iter()
        .enumerate()
        .fold(None, |bottom: Option<usize>, (index, platform)| match bottom {
            Some(best) if platforms[best].y() >= platform.y() => Some(best),
            _ => Some(index),
        })
}

fn score_text(score: u32) -> String {
    format!("Carrots: {}", score)
}

fn score_label(viewport: Viewport, score: u32) -> TextLabel {
    TextLabel::new(score_text(score), viewport.width / 2.0, SCORE_TOP, SCORE_FONT_SIZE)
        .with_origin(0.5, 0.0)
        .with_scroll_factor(0.0)
}

//=========================================================================
// Unit Tests
//=========================================================================
