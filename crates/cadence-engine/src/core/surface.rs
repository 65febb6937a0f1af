use crate::coords::{SurfaceSize, ViewportRect};

/// Drawable surface as seen by the frame pacer.
///
/// The platform owns the true dimensions (`drawable_size`); the backing store
/// and viewport only follow when the pacer reconciles them.
pub trait Surface {
    /// Current dimensions of the drawable area.
    fn drawable_size(&self) -> SurfaceSize;

    /// Resizes the backing store and the logical/display size to `size`.
    fn apply_size(&mut self, size: SurfaceSize);

    /// Sets the rendering viewport.
    fn set_viewport(&mut self, viewport: ViewportRect);
}
