use winit::dpi::PhysicalSize;

/// Drawable surface dimensions in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-sized surface cannot be configured (minimized windows report this).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<PhysicalSize<u32>> for SurfaceSize {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<SurfaceSize> for PhysicalSize<u32> {
    fn from(size: SurfaceSize) -> Self {
        PhysicalSize::new(size.width, size.height)
    }
}

/// Rendering viewport rectangle, in the same units as [`SurfaceSize`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering the whole surface, anchored at the origin.
    #[inline]
    pub const fn covering(size: SurfaceSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_anchors_at_origin() {
        let vp = ViewportRect::covering(SurfaceSize::new(800, 600));
        assert_eq!(vp, ViewportRect::new(0, 0, 800, 600));
    }

    #[test]
    fn empty_when_either_dimension_is_zero() {
        assert!(SurfaceSize::new(0, 600).is_empty());
        assert!(SurfaceSize::new(800, 0).is_empty());
        assert!(!SurfaceSize::new(1, 1).is_empty());
        assert!(ViewportRect::covering(SurfaceSize::new(0, 0)).is_empty());
    }

    #[test]
    fn converts_from_physical_size() {
        let size: SurfaceSize = PhysicalSize::new(1280u32, 720u32).into();
        assert_eq!(size, SurfaceSize::new(1280, 720));
        let back: PhysicalSize<u32> = size.into();
        assert_eq!(back, PhysicalSize::new(1280, 720));
    }
}
