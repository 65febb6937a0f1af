use anyhow::Result;

/// Render client contract implemented by higher layers.
///
/// The client owns all scene state. The pacer calls `update` and then
/// `render` once per executed frame, never concurrently.
///
/// `S` is the surface type the client paints into; clients driven by the
/// winit runtime implement this for every [`SurfaceCtx`](super::SurfaceCtx).
pub trait RenderClient<S: ?Sized> {
    /// Advances client state to `elapsed_ms` since the loop started, with the
    /// current drawable size in physical pixels.
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) -> Result<()>;

    /// Paints the state established by the preceding `update`.
    fn render(&mut self, surface: &mut S) -> Result<()>;
}

impl<S: ?Sized, C: RenderClient<S> + ?Sized> RenderClient<S> for Box<C> {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) -> Result<()> {
        (**self).update(elapsed_ms, height, width)
    }

    fn render(&mut self, surface: &mut S) -> Result<()> {
        (**self).render(surface)
    }
}
