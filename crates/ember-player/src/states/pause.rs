//! Pause overlay state

use crate::context::PlayerContext;
use crate::states::MainMenuState;
use ember_core::Result;
use ember_runtime::{StackRequests, State};
use winit::keyboard::KeyCode;

const PAUSE_COLOR: wgpu::Color = wgpu::Color {
    r: 0.25,
    g: 0.25,
    b: 0.28,
    a: 1.0,
};

/// Overlay pushed above gameplay without destroying it. P or Escape
/// removes the overlay and resumes the session underneath; Q abandons the
/// session and returns to the main menu.
#[derive(Default)]
pub struct PauseState;

impl State<PlayerContext> for PauseState {
    fn name(&self) -> &str {
        "pause"
    }

    fn init(&mut self, ctx: &mut PlayerContext) -> Result<()> {
        ctx.canvas.set_clear_color(PAUSE_COLOR);
        log::info!("paused (P: resume, Q: quit to menu)");
        Ok(())
    }

    fn handle_input(
        &mut self,
        ctx: &mut PlayerContext,
        requests: &mut StackRequests<PlayerContext>,
    ) -> Result<()> {
        if ctx.input.is_key_just_pressed(KeyCode::KeyP)
            || ctx.input.is_key_just_pressed(KeyCode::Escape)
        {
            requests.request_remove();
        }
        if ctx.input.is_key_just_pressed(KeyCode::KeyQ) {
            // Drop the overlay and swap the session below for the menu.
            requests.request_remove();
            requests.request_add(Box::new(MainMenuState), true);
        }
        Ok(())
    }

    fn update(
        &mut self,
        _ctx: &mut PlayerContext,
        _dt: f64,
        _requests: &mut StackRequests<PlayerContext>,
    ) -> Result<()> {
        Ok(())
    }

    fn render(&mut self, _ctx: &mut PlayerContext) -> Result<()> {
        Ok(())
    }
}
