//! Main menu state

use crate::context::PlayerContext;
use crate::states::GameplayState;
use ember_core::Result;
use ember_runtime::{StackRequests, State};
use winit::keyboard::KeyCode;

const MENU_COLOR: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.07,
    b: 0.20,
    a: 1.0,
};

/// Entry screen. Enter starts a gameplay session (replacing the menu),
/// Escape removes the menu and lets the stack run empty, which the host
/// treats as shutdown.
#[derive(Default)]
pub struct MainMenuState;

impl State<PlayerContext> for MainMenuState {
    fn name(&self) -> &str {
        "main_menu"
    }

    fn init(&mut self, ctx: &mut PlayerContext) -> Result<()> {
        ctx.canvas.set_clear_color(MENU_COLOR);
        log::info!("main menu ready (Enter: play, Escape: quit)");
        Ok(())
    }

    fn handle_input(
        &mut self,
        ctx: &mut PlayerContext,
        requests: &mut StackRequests<PlayerContext>,
    ) -> Result<()> {
        if ctx.input.is_key_just_pressed(KeyCode::Enter) {
            requests.request_add(Box::new(GameplayState::new()), true);
        }
        if ctx.input.is_key_just_pressed(KeyCode::Escape) {
            requests.request_remove();
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
        // The menu backdrop is the clear color set in init.
        Ok(())
    }
}
