use anyhow::{bail, Result};

use cadence_engine::core::{RenderClient, SurfaceCtx};

/// Seconds per full trip around the colour wheel.
const CYCLE_SECS: f64 = 6.0;

/// Clears the surface to a colour that drifts with elapsed time.
#[derive(Debug, Default)]
pub struct PulseClient {
    elapsed_ms: f64,
    height: u32,
    width: u32,
}

impl PulseClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear_color(&self) -> wgpu::Color {
        let phase = (self.elapsed_ms / 1000.0 / CYCLE_SECS) * std::f64::consts::TAU;
        let channel = |offset: f64| 0.5 + 0.5 * (phase + offset).sin();
        wgpu::Color {
            r: channel(0.0) * 0.6,
            g: channel(2.0 * std::f64::consts::FRAC_PI_3) * 0.6,
            b: channel(4.0 * std::f64::consts::FRAC_PI_3) * 0.6,
            a: 1.0,
        }
    }
}

impl<'a, 'w> RenderClient<SurfaceCtx<'a, 'w>> for PulseClient {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) -> Result<()> {
        self.elapsed_ms = elapsed_ms;
        self.height = height;
        self.width = width;
        Ok(())
    }

    fn render(&mut self, surface: &mut SurfaceCtx<'a, 'w>) -> Result<()> {
        // Minimized: nothing to present.
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let viewport = surface.viewport();
        let gpu = surface.gpu_mut();

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                let msg = err.to_string();
                if gpu.handle_surface_error(err).is_fatal() {
                    bail!("cannot acquire surface texture: {msg}");
                }
                return Ok(());
            }
        };

        drop(frame.begin_clear_pass(self.clear_color(), viewport));

        surface.pre_present_notify();
        surface.gpu().submit(frame);
        Ok(())
    }
}
