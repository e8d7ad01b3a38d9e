//=========================================================================
// Game Configuration
//=========================================================================
//
// Data-only configuration loaded from RON.
//
// Every section is `#[serde(default)]`, so a file only needs to list the
// values it changes. `validate()` reports suspicious values as warnings
// without rejecting the configuration.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::display::TextureInfo;

//=== ConfigError =========================================================

/// Failure to read or parse a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),

    /// The file is not valid RON for [`GameConfig`].
    Parse(ron::error::SpannedError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read config: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::Parse(e)
    }
}

//=== Sections ============================================================

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
            title: "Carrot Hop".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in units per second squared.
    pub gravity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: 200.0 }
    }
}

/// Inclusive integer range sampled uniformly.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// When horizontal steering input is honored.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalControl {
    /// Steering applies only while the player is not touching ground.
    /// On the frame of a ground contact horizontal velocity is zeroed.
    #[default]
    AirborneOnly,

    /// Steering applies every frame.
    Always,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
    pub platform_count: usize,
    /// Vertical distance between initial platforms.
    pub platform_spacing: f32,
    pub platform_x_range: IntRange,
    pub platform_scale: f32,
    /// Distance below the camera's top edge at which a platform is recycled.
    pub recycle_threshold: f32,
    /// Distance above the camera's top edge a recycled platform is placed at.
    pub recycle_gap: IntRange,
    pub player_start: (f32, f32),
    pub player_scale: f32,
    pub carrot_scale: f32,
    /// Vertical velocity applied on each ground contact (negative is up).
    pub jump_velocity: f32,
    pub move_speed: f32,
    /// How far below the lowest platform the player may fall before losing.
    pub game_over_margin: f32,
    /// Camera deadzone width as a multiple of the viewport width.
    pub deadzone_factor: f32,
    pub horizontal_control: HorizontalControl,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            platform_count: 5,
            platform_spacing: 150.0,
            platform_x_range: IntRange::new(80, 400),
            platform_scale: 0.5,
            recycle_threshold: 700.0,
            recycle_gap: IntRange::new(50, 100),
            player_start: (240.0, 320.0),
            player_scale: 0.5,
            carrot_scale: 1.0,
            jump_velocity: -300.0,
            move_speed: 200.0,
            game_over_margin: 200.0,
            deadzone_factor: 1.5,
            horizontal_control: HorizontalControl::AirborneOnly,
        }
    }
}

//=== GameConfig ==========================================================

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub level: LevelConfig,
    pub textures: Vec<TextureInfo>,
    /// Seed for platform placement. `None` seeds from entropy each session.
    pub seed: Option<u64>,
    /// Logic ticks per second.
    pub tps: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            level: LevelConfig::default(),
            textures: default_textures(),
            seed: None,
            tps: 60.0,
        }
    }
}

/// Texture keys used by the scenes, with their source image sizes.
fn default_textures() -> Vec<TextureInfo> {
    vec![
        TextureInfo::new("background", "assets/bg_layer1.png", 1024.0, 2048.0),
        TextureInfo::new("platform", "assets/ground_grass.png", 380.0, 94.0),
        TextureInfo::new("bunny-stand", "assets/bunny1_stand.png", 120.0, 191.0),
        TextureInfo::new("bunny-jump", "assets/bunny1_jump.png", 150.0, 175.0),
        TextureInfo::new("carrot", "assets/carrot.png", 54.0, 67.0),
    ]
}

impl GameConfig {
    //--- Loading ----------------------------------------------------------

    /// Parses a RON document. Missing fields take their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Reads and parses a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    //--- Validation -------------------------------------------------------

    /// Returns human-readable warnings for values that make the game odd
    /// or unplayable. An empty list means the configuration looks sane.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let level = &self.level;

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            warnings.push(format!(
                "window size {}x{} is not positive",
                self.window.width, self.window.height
            ));
        }
        if self.tps <= 0.0 {
            warnings.push(format!("tps {} is not positive", self.tps));
        }
        if level.platform_count == 0 {
            warnings.push("platform_count is 0; the player has nothing to land on".into());
        }
        if level.platform_x_range.min > level.platform_x_range.max {
            warnings.push(format!(
                "platform_x_range min {} exceeds max {}",
                level.platform_x_range.min, level.platform_x_range.max
            ));
        }
        if level.recycle_gap.min > level.recycle_gap.max {
            warnings.push(format!(
                "recycle_gap min {} exceeds max {}",
                level.recycle_gap.min, level.recycle_gap.max
            ));
        }
        if level.jump_velocity >= 0.0 {
            warnings.push(format!(
                "jump_velocity {} does not point upward",
                level.jump_velocity
            ));
        }
        if self.physics.gravity <= 0.0 {
            warnings.push(format!(
                "gravity {} never brings the player back down",
                self.physics.gravity
            ));
        }
        for key in ["platform", "bunny-stand", "carrot"] {
            if !self.textures.iter().any(|t| t.key == key) {
                warnings.push(format!("texture '{}' is not configured", key));
            }
        }

        warnings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_level_rules() {
        let cfg = GameConfig::default();

        assert_eq!(cfg.window.width, 480.0);
        assert_eq!(cfg.window.height, 640.0);
        assert_eq!(cfg.physics.gravity, 200.0);
        assert_eq!(cfg.level.platform_count, 5);
        assert_eq!(cfg.level.platform_x_range, IntRange::new(80, 400));
        assert_eq!(cfg.level.recycle_gap, IntRange::new(50, 100));
        assert_eq!(cfg.level.jump_velocity, -300.0);
        assert_eq!(cfg.level.horizontal_control, HorizontalControl::AirborneOnly);
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg = GameConfig::from_ron_str(
            "(seed: Some(7), level: (move_speed: 250.0, horizontal_control: Always))",
        )
        .expect("valid config");

        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.level.move_speed, 250.0);
        assert_eq!(cfg.level.horizontal_control, HorizontalControl::Always);
        assert_eq!(cfg.level.platform_count, 5);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        let cfg = GameConfig::from_ron_str("()").expect("valid config");
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = GameConfig::from_ron_str("(tps: \"fast\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.level.platform_count = 0;
        cfg.level.recycle_gap = IntRange::new(100, 50);
        cfg.level.jump_velocity = 10.0;
        cfg.textures.clear();

        let warnings = cfg.validate();

        assert!(warnings.iter().any(|w| w.contains("platform_count")));
        assert!(warnings.iter().any(|w| w.contains("recycle_gap")));
        assert!(warnings.iter().any(|w| w.contains("jump_velocity")));
        assert!(warnings.iter().any(|w| w.contains("'carrot'")));
    }

    #[test]
    fn round_trips_through_ron() {
        let cfg = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };
        let text = ron::to_string(&cfg).expect("serializable");
        assert_eq!(GameConfig::from_ron_str(&text).expect("parseable"), cfg);
    }
}
