//=========================================================================
// Event Collector
//
// Logic-thread end of the platform channel. Once per tick it empties
// whatever the window thread has sent since the last tick and turns it
// into a `Frame`: either the key batches to feed the scene, or a signal
// that the window is gone.
//
// A tick takes at most `MAX_MESSAGES_PER_TICK` messages. Anything left
// over waits for the next tick rather than stalling this one.
//
//=========================================================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

use super::PlatformEvent;
use crate::core::input::InputEvent;

const MAX_MESSAGES_PER_TICK: usize = 100;

//=== Frame ===============================================================

/// What the logic thread should do with the current tick.
#[derive(Debug, PartialEq)]
pub(crate) enum Frame {
    /// Key batches in the order the window thread flushed them.
    Input(Vec<Vec<InputEvent>>),

    /// The window closed or the window thread hung up.
    Shutdown,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self { receiver }
    }

    pub(crate) fn next_frame(&self) -> Frame {
        let mut batches = Vec::new();

        for _ in 0..MAX_MESSAGES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) if batch.is_empty() => {}
                Ok(PlatformEvent::Inputs(batch)) => batches.push(batch),
                Ok(PlatformEvent::WindowClosed) | Err(TryRecvError::Disconnected) => {
                    return Frame::Shutdown;
                }
                Err(TryRecvError::Empty) => return Frame::Input(batches),
            }
        }

        warn!(
            target: "platform::input",
            "{} messages still queued after taking {} this tick",
            self.receiver.len(),
            MAX_MESSAGES_PER_TICK
        );
        Frame::Input(batches)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
