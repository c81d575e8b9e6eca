//! Player application implementing winit ApplicationHandler
//!
//! Owns the window, the player context, and the runtime loop pieces, and
//! feeds winit events into them.

use crate::canvas::WindowCanvas;
use crate::context::PlayerContext;
use crate::states::MainMenuState;
use ember_core::EmberError;
use ember_runtime::{LoopDriver, StateStack};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

pub struct PlayerApp {
    title: String,
    size: (u32, u32),
    fullscreen: bool,

    window: Option<Arc<Window>>,
    ctx: Option<PlayerContext>,
    driver: LoopDriver,
    stack: StateStack<PlayerContext>,

    fatal: Option<EmberError>,
}

impl PlayerApp {
    pub fn new(title: String, size: (u32, u32), fullscreen: bool, fixed_hz: f64) -> Self {
        let mut stack = StateStack::new();
        // Seed the initial state; it is applied on the first frame, so the
        // stack is never empty once the loop starts.
        stack.request_add(Box::new(MainMenuState), true);

        Self {
            title,
            size,
            fullscreen,
            window: None,
            ctx: None,
            driver: LoopDriver::with_fixed_timestep(fixed_hz),
            stack,
            fatal: None,
        }
    }

    /// Startup error captured from inside the event loop, if any.
    pub fn take_error(&mut self) -> Option<EmberError> {
        self.fatal.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> ember_core::Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(self.size.0, self.size.1));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| EmberError::SurfaceCreation(e.to_string()))?,
        );

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let canvas = pollster::block_on(WindowCanvas::new(window.clone()))?;
        self.window = Some(window);
        self.ctx = Some(PlayerContext::new(canvas));
        Ok(())
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                log::error!("startup failed: {e}");
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                ctx.request_quit();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                ctx.canvas.resize(new_size);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => ctx.input.process_key_down(key_code),
                        ElementState::Released => ctx.input.process_key_up(key_code),
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let btn = match button {
                    MouseButton::Left => 0,
                    MouseButton::Right => 1,
                    MouseButton::Middle => 2,
                    _ => return,
                };
                match state {
                    ElementState::Pressed => ctx.input.process_mouse_button_down(btn),
                    ElementState::Released => ctx.input.process_mouse_button_up(btn),
                }
            }

            WindowEvent::RedrawRequested => {
                match self.driver.frame(ctx, &mut self.stack) {
                    Ok(()) => {}
                    Err(EmberError::EmptyStateStack) => {
                        // The last state removed itself; normal shutdown.
                        log::info!("state stack empty, shutting down");
                        ctx.request_quit();
                        event_loop.exit();
                    }
                    Err(e) => {
                        log::error!("frame failed: {e}");
                        self.fatal = Some(e);
                        event_loop.exit();
                    }
                }
                ctx.input.end_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
