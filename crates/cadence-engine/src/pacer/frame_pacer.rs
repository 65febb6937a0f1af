use anyhow::Result;

use crate::coords::{SurfaceSize, ViewportRect};
use crate::core::{RenderClient, Surface};
use crate::time::FrameTime;

use super::{FrameScheduler, PacerConfig};

/// Timing and surface bookkeeping owned by a [`FramePacer`].
#[derive(Debug, Clone, PartialEq)]
pub struct PacerState {
    initial_time: f64,
    /// `None` until the first frame executes.
    last_draw_time: Option<f64>,
    frame_interval_ms: f64,
    surface_size: SurfaceSize,
    frames_executed: u64,
}

impl PacerState {
    pub fn new(config: PacerConfig, initial_time: f64, surface_size: SurfaceSize) -> Self {
        Self {
            initial_time,
            last_draw_time: None,
            frame_interval_ms: config.frame_interval_ms(),
            surface_size,
            frames_executed: 0,
        }
    }

    pub fn initial_time(&self) -> f64 {
        self.initial_time
    }

    pub fn last_draw_time(&self) -> Option<f64> {
        self.last_draw_time
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Size the surface was last reconciled to.
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface_size
    }

    pub fn frames_executed(&self) -> u64 {
        self.frames_executed
    }

    /// Earliest timestamp at which a frame may execute; `None` before the
    /// first frame, which may execute at any time.
    pub fn next_due(&self) -> Option<f64> {
        self.last_draw_time
            .map(|last| last + self.frame_interval_ms)
    }

    pub fn is_due(&self, now: f64) -> bool {
        self.next_due().is_none_or(|due| now >= due)
    }
}

/// Result of a single tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    /// The client was updated and rendered.
    Executed(FrameTime),
    /// Too early; nothing happened beyond requesting the next tick.
    Skipped,
    /// The pacer was stopped; nothing happened at all.
    Stopped,
}

impl TickOutcome {
    pub fn frame(&self) -> Option<&FrameTime> {
        match self {
            TickOutcome::Executed(ft) => Some(ft),
            _ => None,
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, TickOutcome::Executed(_))
    }
}

/// Throttles a render client to a target cadence.
///
/// One pacer per surface. Ticks never overlap: each runs to completion on the
/// thread that owns the surface before the next one starts.
#[derive(Debug, Clone)]
pub struct FramePacer {
    state: PacerState,
    running: bool,
}

impl FramePacer {
    pub fn new(config: PacerConfig, initial_time: f64, initial_size: SurfaceSize) -> Self {
        Self {
            state: PacerState::new(config, initial_time, initial_size),
            running: true,
        }
    }

    pub fn state(&self) -> &PacerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the loop: later ticks neither request a continuation nor execute.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("frame pacer stopped after {} frames", self.state.frames_executed);
        }
        self.running = false;
    }

    /// Milliseconds until a tick would execute a frame; 0 when one is due.
    pub fn time_until_due(&self, now: f64) -> f64 {
        self.state
            .next_due()
            .map_or(0.0, |due| (due - now).max(0.0))
    }

    /// Processes one tick at `now`.
    ///
    /// The next tick is requested before anything else and regardless of
    /// whether this one executes. A due tick reconciles `surface` with its
    /// drawable size, then calls `client.update` followed by `client.render`.
    /// Client errors are returned as-is; `last_draw_time` has already moved.
    ///
    /// `now` must come from the clock that produced `initial_time`; an earlier
    /// `now` is passed through as a negative elapsed time.
    pub fn tick<S, C, Q>(
        &mut self,
        now: f64,
        surface: &mut S,
        client: &mut C,
        scheduler: &mut Q,
    ) -> Result<TickOutcome>
    where
        S: Surface + ?Sized,
        C: RenderClient<S> + ?Sized,
        Q: FrameScheduler + ?Sized,
    {
        if !self.running {
            return Ok(TickOutcome::Stopped);
        }

        scheduler.request_next_frame();

        if !self.state.is_due(now) {
            return Ok(TickOutcome::Skipped);
        }
        self.state.last_draw_time = Some(now);

        let size = surface.drawable_size();
        let resized = self.reconcile(surface, size);

        let elapsed_ms = now - self.state.initial_time;

        let frame_index = self.state.frames_executed;
        self.state.frames_executed += 1;

        client.update(elapsed_ms, size.height, size.width)?;
        client.render(surface)?;

        log::trace!("frame {frame_index} at {elapsed_ms:.2} ms ({}x{})", size.width, size.height);

        Ok(TickOutcome::Executed(FrameTime {
            now_ms: now,
            elapsed_ms,
            frame_index,
            resized,
        }))
    }

    /// Matches backing store and viewport to `size` if it changed.
    fn reconcile<S: Surface + ?Sized>(&mut self, surface: &mut S, size: SurfaceSize) -> bool {
        if size == self.state.surface_size {
            return false;
        }

        log::debug!(
            "surface resized {}x{} -> {}x{}",
            self.state.surface_size.width,
            self.state.surface_size.height,
            size.width,
            size.height
        );

        surface.apply_size(size);
        surface.set_viewport(ViewportRect::covering(size));
        self.state.surface_size = size;
        true
    }
}
