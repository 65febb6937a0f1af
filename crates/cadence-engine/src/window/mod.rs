//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer, and
//! delivers pacer ticks on redraw.

mod redraw;
mod runtime;

pub use redraw::RedrawScheduler;
pub use runtime::{Runtime, RuntimeConfig};
