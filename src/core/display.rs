//=========================================================================
// Display Model
//=========================================================================
//
// Data the presentation layer needs, without any drawing.
//
// - Viewport: logical game size the camera and wrap rules work against
// - TextureCache: texture key → pixel dimensions, filled during preload
// - TextLabel: text overlay element with a scroll factor
//
// Sprite display sizes are texture dimensions times scale, so gameplay
// code that needs a display width (wrap margin, spawn offset) goes
// through the cache.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

//=== Viewport ============================================================

/// Logical size of the game view in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the view in screen space.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

//=== TextureInfo =========================================================

/// A texture known to the cache. Only the dimensions are used by gameplay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    pub key: String,
    pub path: String,
    pub width: f32,
    pub height: f32,
}

impl TextureInfo {
    pub fn new(key: impl Into<String>, path: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            width,
            height,
        }
    }
}

//=== TextureCache ========================================================

/// Texture registry keyed by name.
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureInfo>,
}

impl TextureCache {
    /// Dimensions reported for keys that were never registered.
    pub const MISSING_SIZE: (f32, f32) = (32.0, 32.0);

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture. Re-registering a key keeps the first entry.
    pub fn insert(&mut self, info: TextureInfo) {
        self.textures.entry(info.key.clone()).or_insert(info);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&TextureInfo> {
        self.textures.get(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Pixel dimensions of `key`, or a 32x32 placeholder if it is unknown.
    pub fn dimensions(&self, key: &str) -> (f32, f32) {
        match self.textures.get(key) {
            Some(info) => (info.width, info.height),
            None => {
                warn!("Texture '{}' not loaded, using placeholder", key);
                Self::MISSING_SIZE
            }
        }
    }

    /// Display size of `key` drawn at a uniform `scale`.
    pub fn display_size(&self, key: &str, scale: f32) -> (f32, f32) {
        let (w, h) = self.dimensions(key);
        (w * scale, h * scale)
    }
}

//=== TextLabel ===========================================================

/// A line of text placed in the world or pinned to the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Normalized anchor; (0.5, 0.5) centers the text on (x, y).
    pub origin: (f32, f32),
    pub font_size: f32,
    /// 0.0 pins the label to the screen, 1.0 moves it with the world.
    pub scroll_factor: f32,
    pub visible: bool,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            origin: (0.0, 0.0),
            font_size,
            scroll_factor: 1.0,
            visible: true,
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_scroll_factor(mut self, factor: f32) -> Self {
        self.scroll_factor = factor;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Where the label's anchor lands on screen for a given camera scroll.
    pub fn screen_position(&self, scroll: (f32, f32)) -> (f32, f32) {
        (
            self.x - scroll.0 * self.scroll_factor,
            self.y - scroll.1 * self.scroll_factor,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
