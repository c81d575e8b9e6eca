//! Ember Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `State` — trait for logical modes (menu, gameplay, pause overlay)
//! - `StateStack` / `StackRequests` — deferred-transition state stack
//! - `GameClock` — fixed-timestep accumulator for deterministic simulation
//! - `LoopDriver` — drives transitions, simulation ticks, and rendering
//! - `RenderTarget` — opaque clear/present surface supplied by the host
//! - `InputState` — keyboard and mouse input tracking

mod clock;
mod driver;
mod input;
mod stack;
mod state;
mod target;

pub use clock::{GameClock, MAX_FRAME_TIME};
pub use driver::LoopDriver;
pub use input::InputState;
pub use stack::{StackRequests, StateStack};
pub use state::State;
pub use target::RenderTarget;
