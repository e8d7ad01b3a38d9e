//=========================================================================
// Platform
//
// The winit side of the game: owns the window on the main thread and
// forwards keyboard input to the logic thread.
//
// ```text
//  winit KeyboardInput ─> Keyboard ─> InputBuffer
//                                         │ RedrawRequested
//                                         v
//                           PlatformEvent::Inputs ──channel──> logic thread
//  winit CloseRequested ──> PlatformEvent::WindowClosed ───────┘
// ```
//
// Nothing is drawn yet; RedrawRequested only marks where one frame's
// keys end and immediately asks for the next frame. Quiet frames send
// nothing.
//
// This loop runs on the thread that called `Engine::run`. winit requires
// the main thread on macOS.
//
//=========================================================================

mod input_buffer;
mod keyboard;

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::WindowConfig;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use keyboard::Keyboard;

//=== Platform ============================================================

/// Stays on the main thread. The logic thread only ever sees what
/// comes through `event_sender`.
pub(crate) struct Platform {
    /// Created in `resumed`, not in `new`.
    window: Option<Window>,

    window_config: WindowConfig,

    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,

    keyboard: Keyboard,
}

impl Platform {
    pub(crate) fn new(event_sender: Sender<PlatformEvent>, window_config: WindowConfig) -> Self {
        debug!(target: "platform", "Window requested: {:?}", window_config.title);
        Self {
            window: None,
            window_config,
            buffer: InputBuffer::new(),
            event_sender,
            keyboard: Keyboard::new(),
        }
    }

    /// Blocks in the winit event loop until the window is closed.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    /// A hung-up logic thread only costs a warning; the window must stay
    /// closable.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Sending {} key events", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Logic thread gone, {} key events dropped",
                    count
                );
            }
        }
    }

    fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.window_config.width),
                f64::from(self.window_config.height),
            ))
            .with_resizable(false)
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            trace!(target: "platform", "Resumed with window already open");
            return;
        }

        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window open at {}x{} physical pixels (scale {})",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Could not create window: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                self.keyboard.set_modifiers(state.state());
                trace!(
                    target: "platform::input",
                    "Modifiers now {:?}",
                    self.keyboard.modifiers()
                );
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.keyboard.translate(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Ignored key {:?}", key_event.physical_key);
                }
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
