use winit::window::Window;

use crate::coords::{SurfaceSize, ViewportRect};
use crate::device::Gpu;

use super::surface::Surface;

/// Window-backed surface handed to the pacer and render clients for one tick.
///
/// The window is the source of truth for the drawable size; the `Gpu` owns the
/// backing store (swapchain configuration) and the viewport.
///
/// Lifetimes:
/// - `'a` is the duration of the tick
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct SurfaceCtx<'a, 'w> {
    window: &'a Window,
    gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> SurfaceCtx<'a, 'w> {
    pub fn new(window: &'a Window, gpu: &'a mut Gpu<'w>) -> Self {
        Self { window, gpu }
    }

    pub fn gpu(&self) -> &Gpu<'w> {
        &*self.gpu
    }

    pub fn gpu_mut(&mut self) -> &mut Gpu<'w> {
        &mut *self.gpu
    }

    /// Viewport established by the most recent reconciliation.
    pub fn viewport(&self) -> ViewportRect {
        self.gpu.viewport()
    }

    /// Must be called right before submitting a frame that will be presented.
    pub fn pre_present_notify(&self) {
        self.window.pre_present_notify();
    }
}

impl Surface for SurfaceCtx<'_, '_> {
    fn drawable_size(&self) -> SurfaceSize {
        self.window.inner_size().into()
    }

    /// The window already has the new size; only the swapchain follows.
    fn apply_size(&mut self, size: SurfaceSize) {
        self.gpu.resize(size);
    }

    fn set_viewport(&mut self, viewport: ViewportRect) {
        self.gpu.set_viewport(viewport);
    }
}
