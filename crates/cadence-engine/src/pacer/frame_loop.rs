use anyhow::Result;

use crate::coords::SurfaceSize;
use crate::core::{RenderClient, Surface};
use crate::time::{Clock, ManualClock};

use super::{FramePacer, FrameScheduler, PacerConfig, QueueScheduler, TickOutcome};

/// A pacer bundled with the clock, client and scheduler it drives.
///
/// The surface is borrowed per step because it usually is (the runtime only
/// has it for the duration of a redraw).
pub struct FrameLoop<K, C, Q> {
    clock: K,
    pacer: FramePacer,
    client: C,
    scheduler: Q,
}

impl<K, C, Q> FrameLoop<K, C, Q>
where
    K: Clock,
    Q: FrameScheduler,
{
    /// Starts the loop: `initial_time` is read from `clock` here, once.
    pub fn new(config: PacerConfig, clock: K, initial_size: SurfaceSize, client: C, scheduler: Q) -> Self {
        let initial_time = clock.now_ms();
        Self {
            clock,
            pacer: FramePacer::new(config, initial_time, initial_size),
            client,
            scheduler,
        }
    }

    /// Ticks the pacer at the clock's current time.
    pub fn step<S>(&mut self, surface: &mut S) -> Result<TickOutcome>
    where
        S: Surface + ?Sized,
        C: RenderClient<S>,
    {
        let now = self.clock.now_ms();
        self.pacer
            .tick(now, surface, &mut self.client, &mut self.scheduler)
    }

    pub fn stop(&mut self) {
        self.pacer.stop();
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn scheduler(&self) -> &Q {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Q {
        &mut self.scheduler
    }
}

impl<C> FrameLoop<ManualClock, C, QueueScheduler> {
    /// Runs the scripted loop until the scheduler stops releasing ticks,
    /// returning every outcome in delivery order.
    ///
    /// Stops at the first client error.
    pub fn run_scripted<S>(&mut self, surface: &mut S) -> Result<Vec<TickOutcome>>
    where
        S: Surface + ?Sized,
        C: RenderClient<S>,
    {
        let mut outcomes = Vec::new();
        while let Some(ts) = self.scheduler.next_tick() {
            self.clock.set(ts);
            outcomes.push(self.step(surface)?);
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacer::testing::{Call, RecordingClient, RecordingSurface};

    fn scripted(
        interval_ms: f64,
        timestamps: &[f64],
        surface: &RecordingSurface,
    ) -> FrameLoop<ManualClock, RecordingClient, QueueScheduler> {
        FrameLoop::new(
            PacerConfig::from_interval_ms(interval_ms).unwrap(),
            ManualClock::new(0.0),
            surface.drawable_size(),
            RecordingClient::new(surface.log()),
            QueueScheduler::new(timestamps.iter().copied()),
        )
    }

    #[test]
    fn sixty_hertz_scenario() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(300, 150));
        let mut frame_loop = scripted(16.67, &[0.0, 10.0, 20.0, 40.0], &surface);

        let outcomes = frame_loop.run_scripted(&mut surface).unwrap();

        let executed: Vec<f64> = outcomes
            .iter()
            .filter_map(|o| o.frame().map(|ft| ft.now_ms))
            .collect();
        assert_eq!(executed, vec![0.0, 20.0, 40.0]);
        assert_eq!(outcomes[1], TickOutcome::Skipped);
        assert_eq!(frame_loop.client().elapsed(), vec![0.0, 20.0, 40.0]);
    }

    #[test]
    fn skipped_ticks_keep_the_loop_alive() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(300, 150));
        let stamps: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let mut frame_loop = scripted(100.0, &stamps, &surface);

        let outcomes = frame_loop.run_scripted(&mut surface).unwrap();

        assert_eq!(outcomes.len(), 10);
        assert_eq!(outcomes.iter().filter(|o| o.is_executed()).count(), 1);
        assert_eq!(frame_loop.scheduler().requests(), 10);
    }

    #[test]
    fn stopping_drains_no_further_ticks() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(300, 150));
        let mut frame_loop = scripted(16.67, &[0.0, 20.0, 40.0], &surface);

        frame_loop.stop();
        let outcomes = frame_loop.run_scripted(&mut surface).unwrap();

        assert_eq!(outcomes, vec![TickOutcome::Stopped]);
        assert_eq!(frame_loop.scheduler().remaining(), 2);
        assert!(surface.log().borrow().is_empty());
    }

    #[test]
    fn client_error_ends_the_run() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(300, 150));
        let mut frame_loop = scripted(16.67, &[0.0, 20.0, 40.0], &surface);
        frame_loop.client_mut().fail_update_at(1);

        let err = frame_loop.run_scripted(&mut surface).unwrap_err();

        assert_eq!(err.to_string(), "update failed");
        assert_eq!(frame_loop.client().elapsed(), vec![0.0, 20.0]);
        assert_eq!(frame_loop.scheduler().remaining(), 1);
    }

    #[test]
    fn resize_is_observed_by_the_next_update() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(300, 150));
        let mut frame_loop = scripted(16.67, &[0.0], &surface);
        frame_loop.run_scripted(&mut surface).unwrap();

        surface.set_drawable(SurfaceSize::new(1920, 1080));
        frame_loop.clock().set(20.0);
        frame_loop.step(&mut surface).unwrap();

        let log = surface.log();
        let log = log.borrow();
        assert_eq!(log.last(), Some(&Call::Render));
        assert!(log.contains(&Call::Update { elapsed_ms: 20.0, height: 1080, width: 1920 }));
    }
}
