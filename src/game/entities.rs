//=========================================================================
// Level Entities
//=========================================================================
//
// Sprites of the level: a body plus the display size it was built from.
//
// Positions are sprite centers (origin 0.5, 0.5), which is also where the
// physics body is centered.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::physics::{Body, Faces, Vec2};

//=== Player ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub display_size: (f32, f32),
}

impl Player {
    /// A falling body that only lands on things; it passes through
    /// platforms from below and from the sides.
    pub fn new(position: Vec2, display_size: (f32, f32)) -> Self {
        let mut body = Body::dynamic(position, Vec2::new(display_size.0, display_size.1));
        body.check_collision = Faces::DOWN;
        Self { body, display_size }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// True if the last physics step ended with the player standing on
    /// something.
    pub fn is_grounded(&self) -> bool {
        self.body.touching.down
    }
}

//=== Platform ============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub body: Body,
    pub display_size: (f32, f32),
}

impl Platform {
    pub fn new(position: Vec2, display_size: (f32, f32)) -> Self {
        Self {
            body: Body::fixed(position, Vec2::new(display_size.0, display_size.1)),
            display_size,
        }
    }

    pub fn x(&self) -> f32 {
        self.body.position.x
    }

    pub fn y(&self) -> f32 {
        self.body.position.y
    }

    /// Moves the sprite and refreshes its static body to match.
    pub fn move_to(&mut self, position: Vec2) {
        self.body.sync_position(position);
    }

    /// Where a carrot spawned for this platform appears: one platform
    /// height above its center.
    pub fn carrot_spawn_point(&self) -> Vec2 {
        Vec2::new(self.x(), self.y() - self.display_size.1)
    }
}

//=== Carrot ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Carrot {
    pub body: Body,
    pub display_size: (f32, f32),
    /// Index of the platform slot this carrot was spawned for.
    pub anchor: usize,
}

impl Carrot {
    pub fn new(position: Vec2, display_size: (f32, f32), anchor: usize) -> Self {
        Self {
            body: Body::dynamic(position, Vec2::new(display_size.0, display_size.1)),
            display_size,
            anchor,
        }
    }

    /// Re-initializes a pooled carrot for a new spawn.
    pub fn respawn(&mut self, position: Vec2, display_size: (f32, f32), anchor: usize) {
        self.body.reset(position);
        self.body.set_size(display_size.0, display_size.1);
        self.body.enabled = true;
        self.display_size = display_size;
        self.anchor = anchor;
    }
}

//=== Horizontal Wrap =====================================================

/// Wraps an x coordinate around a `game_width` wide playfield.
///
/// A sprite that leaves by more than half its width on one side re-enters
/// from the other:
///   x < -w/2        → game_width + w/2
///   x > game_width + w/2 → -w/2
pub fn wrap_horizontal(x: f32, display_width: f32, game_width: f32) -> f32 {
    let half = display_width / 2.0;
    if x < -half {
        game_width + half
    } else if x > game_width + half {
        -half
    } else {
        x
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
