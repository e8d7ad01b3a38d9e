//=========================================================================
// Keyboard Translation
//
// winit key events in, `InputEvent`s out. Only the keys named by
// `KeyCode` survive; everything else (letters, F-keys, media keys) is
// dropped here so nothing downstream has to filter.
//
// winit reports modifiers through a separate ModifiersChanged event, so
// the last known state is cached and stamped onto each key event.
//
//=========================================================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

use crate::core::input::{InputEvent, KeyCode, Modifiers};

//=== Keyboard ============================================================

pub(crate) struct Keyboard {
    modifiers: Modifiers,
}

impl Keyboard {
    pub(crate) fn new() -> Self {
        Self { modifiers: Modifiers::NONE }
    }

    pub(crate) fn set_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key() || state.super_key(),
            alt: state.alt_key(),
        };
    }

    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns `None` for OS auto-repeat and for keys the game ignores.
    pub(crate) fn translate(&self, event: &KeyEvent) -> Option<InputEvent> {
        if event.repeat {
            return None;
        }
        match event.physical_key {
            PhysicalKey::Code(code) => self.translate_code(code, event.state),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    fn translate_code(&self, code: WinitKeyCode, state: ElementState) -> Option<InputEvent> {
        let key = game_key(code)?;
        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }
}

fn game_key(code: WinitKeyCode) -> Option<KeyCode> {
    let key = match code {
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => return None,
    };
    Some(key)
}

//=========================================================================
// Unit Tests
//=========================================================================
