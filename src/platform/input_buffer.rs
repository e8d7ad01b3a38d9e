//=========================================================================
// Input Buffer
//
// Key events gathered between two RedrawRequested callbacks.
//
// OS key repeat sends a stream of identical KeyDowns for a held arrow;
// only the first survives, since the state tracker would ignore the rest
// anyway. Order is otherwise preserved so a Space tap within one frame
// still reaches the game as press then release.
//
//=========================================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    pending: Vec<InputEvent>,
}

impl InputBuffer {
    const FRAME_CAPACITY: usize = 16;

    pub(crate) fn new() -> Self {
        Self {
            pending: Vec::with_capacity(Self::FRAME_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.pending.last() != Some(&event) {
            self.pending.push(event);
        }
    }

    /// Hands over the frame's events, or `None` if the frame was quiet.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::replace(
                &mut self.pending,
                Vec::with_capacity(Self::FRAME_CAPACITY),
            ))
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
