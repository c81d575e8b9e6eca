//! Player context — what concrete states see of the host

use crate::canvas::WindowCanvas;
use ember_core::Result;
use ember_runtime::{InputState, RenderTarget};

/// Host context threaded through every state callback: the window canvas,
/// the per-frame input snapshot, and a quit flag.
pub struct PlayerContext {
    pub canvas: WindowCanvas,
    pub input: InputState,
    quit_requested: bool,
}

impl PlayerContext {
    pub fn new(canvas: WindowCanvas) -> Self {
        Self {
            canvas,
            input: InputState::new(),
            quit_requested: false,
        }
    }

    /// Ask the host to stop producing frames.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl RenderTarget for PlayerContext {
    fn clear(&mut self) -> Result<()> {
        self.canvas.clear()
    }

    fn present(&mut self) -> Result<()> {
        self.canvas.present()
    }

    fn is_open(&self) -> bool {
        !self.quit_requested
    }
}
