//! Gameplay state — fixed-step counter simulation

use crate::context::PlayerContext;
use crate::states::{MainMenuState, PauseState};
use ember_core::Result;
use ember_runtime::{StackRequests, State};
use winit::keyboard::KeyCode;

const GAMEPLAY_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.25,
    b: 0.10,
    a: 1.0,
};

/// Stand-in for an actual game session: advances a tick counter at the
/// fixed simulation rate. P or Escape pushes the pause overlay on top;
/// Backspace replaces the session with the main menu.
pub struct GameplayState {
    ticks: u64,
    sim_time: f64,
}

impl GameplayState {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            sim_time: 0.0,
        }
    }
}

impl Default for GameplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerContext> for GameplayState {
    fn name(&self) -> &str {
        "gameplay"
    }

    fn init(&mut self, ctx: &mut PlayerContext) -> Result<()> {
        ctx.canvas.set_clear_color(GAMEPLAY_COLOR);
        log::info!("gameplay session started (P: pause, Backspace: back to menu)");
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
            requests.request_add(Box::new(PauseState::default()), false);
        }
        if ctx.input.is_key_just_pressed(KeyCode::Backspace) {
            requests.request_add(Box::new(MainMenuState), true);
        }
        Ok(())
    }

    fn update(
        &mut self,
        _ctx: &mut PlayerContext,
        dt: f64,
        _requests: &mut StackRequests<PlayerContext>,
    ) -> Result<()> {
        self.ticks += 1;
        self.sim_time += dt;
        if self.ticks % 600 == 0 {
            log::debug!("simulated {:.1}s over {} ticks", self.sim_time, self.ticks);
        }
        Ok(())
    }

    fn render(&mut self, _ctx: &mut PlayerContext) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self, _ctx: &mut PlayerContext) {
        log::info!("gameplay paused at tick {}", self.ticks);
    }

    fn resume(&mut self, ctx: &mut PlayerContext) {
        ctx.canvas.set_clear_color(GAMEPLAY_COLOR);
        log::info!("gameplay resumed at tick {}", self.ticks);
    }
}
