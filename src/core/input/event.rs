//=========================================================================
// Input Events
//
// Keyboard events as the logic thread sees them.
//
// The platform layer translates winit key events into `InputEvent`s and
// drops every key the game has no use for, so scenes only ever match on
// the handful of keys below.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keys the game reacts to.
///
/// - `ArrowLeft` / `ArrowRight`: steer the player
/// - `Space`: restart from the game-over screen
/// - the rest are mapped so menus and debug bindings have something to
///   bind to without touching the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    Escape,
}

//=== Modifiers ===========================================================

/// Modifier keys held when a key event happened.
///
/// Command on macOS reports as `ctrl`, Option as `alt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

//=== InputEvent ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
}

impl InputEvent {
    /// A key press with no modifiers held.
    pub fn press(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    /// A key release with no modifiers held.
    pub fn release(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    pub fn key(&self) -> KeyCode {
        match self {
            Self::KeyDown { key, .. } | Self::KeyUp { key, .. } => *key,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::KeyDown { modifiers, .. } | Self::KeyUp { modifiers, .. } => *modifiers,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
