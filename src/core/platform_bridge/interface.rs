//=========================================================================
// Platform Bridge Interface
//
// The messages the window thread sends to the logic thread, and the ways
// the window side can fail before or while the game runs.
//
//=========================================================================

use std::fmt;

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// One rendered frame's worth of key events, oldest first.
    Inputs(Vec<InputEvent>),

    WindowClosed,
}

//=== PlatformError =======================================================

/// Failure of the winit event loop. The message is winit's own.
#[derive(Debug)]
pub enum PlatformError {
    /// No event loop could be created (no display, wrong thread).
    EventLoopCreation(String),

    /// The running event loop returned an error.
    EventLoopExecution(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoopCreation(reason) => write!(f, "could not open a window: {}", reason),
            Self::EventLoopExecution(reason) => write!(f, "window event loop failed: {}", reason),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================
