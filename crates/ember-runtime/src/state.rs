//! State trait — the contract between the loop and a logical game mode

use crate::stack::StackRequests;
use ember_core::Result;

/// A logical mode of the application (main menu, gameplay, pause overlay).
///
/// Exactly one state — the top of the [`StateStack`](crate::StateStack) — is
/// active at a time and receives `handle_input`, `update`, and `render`
/// calls. States below the top are paused and receive nothing until resumed.
///
/// `C` is the host context (window, canvas, input). The core never inspects
/// it; it is threaded through so concrete states can draw and poll input.
///
/// Transitions are requested through the [`StackRequests`] handle passed to
/// `handle_input` and `update`, never applied immediately: a state may ask
/// for its own replacement from inside its own callback without the stack
/// reshaping under it.
pub trait State<C> {
    /// Human-readable identifier, used in diagnostics.
    fn name(&self) -> &str;

    /// Called once, right after the state is pushed onto the stack.
    fn init(&mut self, ctx: &mut C) -> Result<()>;

    /// Called once per simulation tick, before `update`.
    fn handle_input(&mut self, ctx: &mut C, requests: &mut StackRequests<C>) -> Result<()>;

    /// Called once per simulation tick with the fixed timestep in seconds.
    fn update(&mut self, ctx: &mut C, dt: f64, requests: &mut StackRequests<C>) -> Result<()>;

    /// Called once per frame, after the target has been cleared.
    fn render(&mut self, ctx: &mut C) -> Result<()>;

    /// Called when another state is pushed on top of this one.
    fn pause(&mut self, _ctx: &mut C) {}

    /// Called when this state becomes the top again after a removal.
    fn resume(&mut self, _ctx: &mut C) {}
}
