//=========================================================================
// Camera
//=========================================================================
//
// Scrolling view over the world with target following and a deadzone.
//
// Deadzone semantics:
//   A rectangle centered on the camera midpoint. While the target stays
//   inside it the camera does not move; once the target leaves it the
//   camera scrolls just enough to bring the target back to its edge.
//   A zero extent on an axis means that axis tracks the target exactly.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::display::Viewport;
use crate::core::physics::Vec2;

//=== Camera ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World coordinate shown at the top-left corner of the view.
    pub scroll: Vec2,
    viewport: Viewport,
    deadzone: Option<Vec2>,
    following: bool,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scroll: Vec2::ZERO,
            viewport,
            deadzone: None,
            following: false,
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Sets the deadzone size. A height of 0 leaves vertical follow
    /// unrestricted.
    pub fn set_deadzone(&mut self, width: f32, height: f32) {
        self.deadzone = Some(Vec2::new(width.max(0.0), height.max(0.0)));
    }

    pub fn clear_deadzone(&mut self) {
        self.deadzone = None;
    }

    pub fn deadzone(&self) -> Option<Vec2> {
        self.deadzone
    }

    /// Starts following and centers on `target` immediately.
    pub fn start_follow(&mut self, target: Vec2) {
        self.following = true;
        self.center_on(target);
    }

    pub fn stop_follow(&mut self) {
        self.following = false;
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    //--- Queries ----------------------------------------------------------

    pub fn scroll_x(&self) -> f32 {
        self.scroll.x
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll.y
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// World coordinate at the center of the view.
    pub fn midpoint(&self) -> Vec2 {
        Vec2::new(
            self.scroll.x + self.viewport.width / 2.0,
            self.scroll.y + self.viewport.height / 2.0,
        )
    }

    //--- Movement ---------------------------------------------------------

    pub fn center_on(&mut self, target: Vec2) {
        self.scroll = Vec2::new(
            target.x - self.viewport.width / 2.0,
            target.y - self.viewport.height / 2.0,
        );
    }

    /// Moves the view toward `target` according to the deadzone.
    /// Does nothing unless following.
    pub fn follow(&mut self, target: Vec2) {
        if !self.following {
            return;
        }

        let Some(zone) = self.deadzone else {
            self.center_on(target);
            return;
        };

        let mut mid = self.midpoint();
        mid.x = Self::track_axis(mid.x, zone.x, target.x);
        mid.y = Self::track_axis(mid.y, zone.y, target.y);
        self.center_on(mid);
    }

    fn track_axis(mid: f32, extent: f32, target: f32) -> f32 {
        let low = mid - extent / 2.0;
        let high = mid + extent / 2.0;

        if target < low {
            mid - (low - target)
        } else if target > high {
            mid + (target - high)
        } else {
            mid
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
