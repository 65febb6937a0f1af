//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the frame pacer, the
//! platform surface, and the render client driven by it. The pacer only ever
//! talks to these traits, so it can be exercised without a window or a GPU.

mod client;
mod ctx;
mod surface;

pub use client::RenderClient;
pub use ctx::SurfaceCtx;
pub use surface::Surface;
