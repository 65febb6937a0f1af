use crate::error::HostError;

/// Pacing configuration.
///
/// Stored as the frame interval; the target frequency is only an input format.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PacerConfig {
    frame_interval_ms: f64,
}

impl PacerConfig {
    pub const DEFAULT_FPS: f64 = 60.0;

    /// Paces frames at `target_fps` frames per second.
    pub fn from_fps(target_fps: f64) -> Result<Self, HostError> {
        if !(target_fps.is_finite() && target_fps > 0.0) {
            return Err(HostError::InvalidFrameRate(target_fps));
        }
        Ok(Self {
            frame_interval_ms: 1000.0 / target_fps,
        })
    }

    /// Paces frames `interval_ms` apart. Zero disables throttling.
    pub fn from_interval_ms(interval_ms: f64) -> Result<Self, HostError> {
        if !(interval_ms.is_finite() && interval_ms >= 0.0) {
            return Err(HostError::InvalidFrameInterval(interval_ms));
        }
        Ok(Self {
            frame_interval_ms: interval_ms,
        })
    }

    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Target frequency; infinite when throttling is disabled.
    pub fn target_fps(&self) -> f64 {
        1000.0 / self.frame_interval_ms
    }
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 1000.0 / Self::DEFAULT_FPS,
        }
    }
}
