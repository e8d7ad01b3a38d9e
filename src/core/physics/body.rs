//=========================================================================
// Physics Body
//=========================================================================
//
// Axis-aligned box positioned by its center.
//
//=========================================================================

//=== Vec2 ================================================================

/// 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Faces ===============================================================

/// One flag per box face. Used both for which faces collide and for
/// which faces touched something this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Faces {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Faces {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub const ALL: Self = Self {
        up: true,
        down: true,
        left: true,
        right: true,
    };

    /// Bottom face only: lands on things, passes through them otherwise.
    pub const DOWN: Self = Self {
        up: false,
        down: true,
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

//=== Body ================================================================

/// A physics body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center of the box.
    pub position: Vec2,
    /// Width and height of the box.
    pub size: Vec2,
    pub velocity: Vec2,
    pub allow_gravity: bool,
    /// Static bodies are never moved by the stepper or by collisions.
    pub immovable: bool,
    /// Disabled bodies neither move, collide, nor overlap.
    pub enabled: bool,
    pub check_collision: Faces,
    pub touching: Faces,
    pub(super) previous: Vec2,
}

impl Body {
    /// A gravity-affected body that collides on every face.
    pub fn dynamic(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            allow_gravity: true,
            immovable: false,
            enabled: true,
            check_collision: Faces::ALL,
            touching: Faces::NONE,
            previous: position,
        }
    }

    /// An immovable body unaffected by gravity.
    pub fn fixed(position: Vec2, size: Vec2) -> Self {
        Self {
            allow_gravity: false,
            immovable: true,
            ..Self::dynamic(position, size)
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Teleports the body, clearing motion and contact state.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.previous = position;
        self.velocity = Vec2::ZERO;
        self.touching = Faces::NONE;
    }

    /// Moves a static body to follow its display object.
    pub fn sync_position(&mut self, position: Vec2) {
        self.position = position;
        self.previous = position;
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    //--- Bounds -----------------------------------------------------------

    pub fn left(&self) -> f32 {
        self.position.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y / 2.0
    }

    pub fn previous_position(&self) -> Vec2 {
        self.previous
    }

    /// Strict AABB intersection; boxes that share only an edge do not intersect.
    pub fn intersects(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_centered() {
        let body = Body::dynamic(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(body.left(), 90.0);
        assert_eq!(body.right(), 110.0);
        assert_eq!(body.top(), 45.0);
        assert_eq!(body.bottom(), 55.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Body::dynamic(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Body::dynamic(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn fixed_body_is_static() {
        let body = Body::fixed(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert!(body.immovable);
        assert!(!body.allow_gravity);
        assert_eq!(body.check_collision, Faces::ALL);
    }

    #[test]
    fn reset_clears_motion() {
        let mut body = Body::dynamic(Vec2::ZERO, Vec2::new(1.0, 1.0));
        body.velocity = Vec2::new(5.0, 5.0);
        body.touching.down = true;

        body.reset(Vec2::new(3.0, 4.0));

        assert_eq!(body.position, Vec2::new(3.0, 4.0));
        assert_eq!(body.previous_position(), Vec2::new(3.0, 4.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.touching.any());
    }
}
