//! Render target trait — the host-owned surface the loop draws into

use ember_core::Result;

/// An opaque render surface owned by the host environment.
///
/// The loop driver clears it before the active state renders and presents it
/// afterward. The core never creates, resizes, or destroys the target.
pub trait RenderTarget {
    /// Prepare the target for a new frame.
    fn clear(&mut self) -> Result<()>;

    /// Make the finished frame visible.
    fn present(&mut self) -> Result<()>;

    /// Whether the host still wants frames. `false` terminates
    /// [`LoopDriver::run`](crate::LoopDriver::run).
    fn is_open(&self) -> bool;
}
