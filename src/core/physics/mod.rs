//=========================================================================
// Arcade Physics
//=========================================================================
//
// Axis-aligned bodies with gravity, one-sided solid colliders, and
// overlap triggers.
//
// Architecture:
//   step(body, dt)        → reset touching, integrate velocity/position
//   collide(body, fixed)  → separate a dynamic body from a static one
//   overlaps(a, b)        → trigger test, no separation
//
// Per-frame order used by scenes:
//   step all dynamic bodies → collide pairs → evaluate overlaps
//
// Coordinates follow screen convention: y grows downward, so gravity
// is positive and "down" contact means standing on top of something.
//
//=========================================================================

//=== Module Declarations =================================================

mod body;

//=== Public API ==========================================================

pub use body::{Body, Faces, Vec2};

//=== ArcadePhysics =======================================================

/// Distance a body may already be inside a static body and still be
/// separated on the side it came from.
const OVERLAP_BIAS: f32 = 4.0;

/// Stateless physics stepper holding the world gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcadePhysics {
    /// Downward acceleration in units per second squared.
    pub gravity: f32,
}

impl ArcadePhysics {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    //--- Integration ------------------------------------------------------

    /// Clears contact flags, remembers the pre-step position, and
    /// integrates one tick of motion.
    ///
    /// Static and disabled bodies only have their contact flags cleared.
    pub fn step(&self, body: &mut Body, dt: f32) {
        body.touching = Faces::NONE;
        body.previous = body.position;

        if !body.enabled || body.immovable {
            return;
        }

        if body.allow_gravity {
            body.velocity.y += self.gravity * dt;
        }
        body.position.x += body.velocity.x * dt;
        body.position.y += body.velocity.y * dt;
    }

    //--- Collision --------------------------------------------------------

    /// Separates `body` from the immovable `fixed` body.
    ///
    /// Separation happens only on a face both bodies check, and only if
    /// `body` was on that side of `fixed` before this step. A body that
    /// does not check its `up` face therefore passes through a platform
    /// from below and lands on it on the way down.
    ///
    /// A body that was already inside `fixed` before the step, with its
    /// center above the center of `fixed`, is lifted onto the top face.
    ///
    /// Returns `true` if the bodies were separated.
    pub fn collide(&self, body: &mut Body, fixed: &Body) -> bool {
        if !body.enabled || !fixed.enabled || !body.intersects(fixed) {
            return false;
        }

        let half = Vec2::new(body.size.x / 2.0, body.size.y / 2.0);
        let prev_bottom = body.previous.y + half.y;
        let prev_top = body.previous.y - half.y;
        let prev_right = body.previous.x + half.x;
        let prev_left = body.previous.x - half.x;

        let embedded_from_above = body.previous.y < fixed.position.y
            && prev_bottom > fixed.top()
            && prev_right > fixed.left()
            && prev_left < fixed.right();

        if body.check_collision.down
            && fixed.check_collision.up
            && body.velocity.y >= 0.0
            && (prev_bottom <= fixed.top() + OVERLAP_BIAS || embedded_from_above)
        {
            body.position.y = fixed.top() - half.y;
            body.velocity.y = 0.0;
            body.touching.down = true;
            return true;
        }

        if body.check_collision.up
            && fixed.check_collision.down
            && body.velocity.y <= 0.0
            && prev_top >= fixed.bottom() - OVERLAP_BIAS
        {
            body.position.y = fixed.bottom() + half.y;
            body.velocity.y = 0.0;
            body.touching.up = true;
            return true;
        }

        if body.check_collision.right
            && fixed.check_collision.left
            && prev_right <= fixed.left() + OVERLAP_BIAS
        {
            body.position.x = fixed.left() - half.x;
            body.velocity.x = 0.0;
            body.touching.right = true;
            return true;
        }

        if body.check_collision.left
            && fixed.check_collision.right
            && prev_left >= fixed.right() - OVERLAP_BIAS
        {
            body.position.x = fixed.right() + half.x;
            body.velocity.x = 0.0;
            body.touching.left = true;
            return true;
        }

        false
    }

    /// Overlap trigger test: both bodies enabled and intersecting.
    pub fn overlaps(&self, a: &Body, b: &Body) -> bool {
        a.enabled && b.enabled && a.intersects(b)
    }
}

impl Default for ArcadePhysics {
    fn default() -> Self {
        Self::new(200.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
