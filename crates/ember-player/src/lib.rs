//! Ember Player — demo host for the Ember runtime
//!
//! Provides the winit/wgpu application shell and the concrete demo states
//! (main menu, gameplay, pause overlay) driven by the runtime's state stack
//! and fixed-timestep loop.

mod canvas;
mod context;
mod player_app;
pub mod states;

pub use canvas::WindowCanvas;
pub use context::PlayerContext;
pub use player_app::PlayerApp;
