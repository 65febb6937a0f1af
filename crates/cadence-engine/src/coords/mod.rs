//! Pixel-space geometry shared by the pacer, the surface and render clients.
//!
//! All values are physical pixels with a top-left origin.

mod viewport;

pub use viewport::{SurfaceSize, ViewportRect};
