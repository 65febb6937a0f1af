use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{RenderClient, SurfaceCtx};
use crate::device::{Gpu, GpuInit};
use crate::error::HostError;
use crate::pacer::{FrameLoop, PacerConfig};
use crate::time::{Clock, SystemClock};

use super::redraw::{wake_plan, Wake};
use super::RedrawScheduler;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub pacing: PacerConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "cadence".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            pacing: PacerConfig::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens a window, builds the client with `make_client` once the GPU
    /// context exists, and paces it until the window closes or a frame fails.
    ///
    /// Context, client construction and frame failures all end the session
    /// and are returned as [`HostError`]s.
    pub fn run<C, F>(config: RuntimeConfig, gpu_init: GpuInit, make_client: F) -> Result<()>
    where
        C: for<'a, 'w> RenderClient<SurfaceCtx<'a, 'w>> + 'static,
        F: FnOnce(&Gpu<'_>) -> Result<C> + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, make_client);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

/// Creates the graphics context, then the client from it.
///
/// A context failure means the client factory is never called; neither
/// factory is retried.
fn open_session<E, C>(
    make_entry: impl FnOnce() -> Result<E>,
    make_client: impl FnOnce(&E) -> Result<C>,
) -> Result<(E, C), HostError> {
    let entry = make_entry().map_err(HostError::ContextUnavailable)?;
    let client = make_client(&entry).map_err(HostError::ClientConstruction)?;
    Ok((entry, client))
}

fn record_failure(slot: &mut Option<HostError>, err: HostError) {
    if slot.is_none() {
        *slot = Some(err);
    } else {
        log::debug!("ignoring follow-up failure: {err}");
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Session<C> {
    entry: WindowEntry,
    frame_loop: FrameLoop<SystemClock, C, RedrawScheduler>,
}

struct AppState<C, F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    make_client: Option<F>,

    session: Option<Session<C>>,
    failure: Option<HostError>,
    exit_requested: bool,
}

impl<C, F> AppState<C, F>
where
    C: for<'a, 'w> RenderClient<SurfaceCtx<'a, 'w>> + 'static,
    F: FnOnce(&Gpu<'_>) -> Result<C> + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, make_client: F) -> Self {
        Self {
            config,
            gpu_init,
            make_client: Some(make_client),
            session: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        if let Some(session) = self.session.as_mut() {
            session.frame_loop.stop();
        }
        event_loop.exit();
    }

    /// Records a session-ending error. Only the first one is kept; it is
    /// returned from [`Runtime::run`], which leaves reporting to the caller.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: HostError) {
        record_failure(&mut self.failure, err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize GPU context for window")
    }

    fn start_session(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HostError> {
        // Taken up front: whatever happens below, the factory never runs twice.
        let make_client = self
            .make_client
            .take()
            .ok_or_else(|| HostError::ClientConstruction(anyhow::anyhow!("client already constructed")))?;

        let (entry, client) = open_session(
            || self.create_window_entry(event_loop),
            |entry: &WindowEntry| make_client(entry.borrow_gpu()),
        )?;

        let initial_size = entry.borrow_gpu().size();
        let frame_loop = FrameLoop::new(
            self.config.pacing,
            SystemClock::new(),
            initial_size,
            client,
            RedrawScheduler::default(),
        );

        log::info!(
            "pacing '{}' at {:.1} fps ({}x{})",
            self.config.title,
            self.config.pacing.target_fps(),
            initial_size.width,
            initial_size.height
        );

        // Bootstrap tick; every later one is requested by the pacer itself.
        entry.with_window(|w| w.request_redraw());

        self.session = Some(Session { entry, frame_loop });
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(Session { entry, frame_loop }) = self.session.as_mut() else {
            return;
        };

        let result = entry.with_mut(|fields| {
            let mut surface = SurfaceCtx::new(fields.window, fields.gpu);
            frame_loop.step(&mut surface)
        });

        if let Err(cause) = result {
            let frame_index = frame_loop
                .pacer()
                .state()
                .frames_executed()
                .saturating_sub(1);
            self.fail(event_loop, HostError::Frame { frame_index, cause });
        }
    }
}

impl<C, F> ApplicationHandler for AppState<C, F>
where
    C: for<'a, 'w> RenderClient<SurfaceCtx<'a, 'w>> + 'static,
    F: FnOnce(&Gpu<'_>) -> Result<C> + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.exit_requested {
            return;
        }

        if let Err(err) = self.start_session(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        let frame_loop = &mut session.frame_loop;
        let plan = wake_plan(
            frame_loop.scheduler().is_requested(),
            frame_loop.pacer().state().next_due(),
            frame_loop.clock().now_ms(),
        );

        match plan {
            Wake::Sleep => event_loop.set_control_flow(ControlFlow::Wait),
            // Sleep until the pacer is due instead of spinning through no-op ticks.
            Wake::SleepUntil(due) => {
                let deadline = frame_loop.clock().instant_at(due);
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            Wake::RedrawNow => {
                frame_loop.scheduler_mut().take();
                event_loop.set_control_flow(ControlFlow::Wait);
                session.entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!(
                    "window closed after {} frames",
                    session.frame_loop.pacer().state().frames_executed()
                );
                self.request_exit(event_loop);
            }

            // Reconciliation happens inside the pacer; just make sure a tick comes.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                session.entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Drop GPU resources while the window still exists.
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::bail;

    use super::*;

    #[test]
    fn missing_context_never_builds_the_client() {
        let client_calls = Cell::new(0);

        let result = open_session(
            || -> Result<()> { bail!("no adapter") },
            |_: &()| {
                client_calls.set(client_calls.get() + 1);
                Ok(())
            },
        );

        assert!(matches!(result, Err(HostError::ContextUnavailable(_))));
        assert_eq!(client_calls.get(), 0);
    }

    #[test]
    fn client_failure_is_reported_once() {
        let context_calls = Cell::new(0);
        let client_calls = Cell::new(0);

        let result = open_session(
            || {
                context_calls.set(context_calls.get() + 1);
                Ok(42u32)
            },
            |ctx: &u32| -> Result<()> {
                assert_eq!(*ctx, 42);
                client_calls.set(client_calls.get() + 1);
                bail!("pipeline creation failed")
            },
        );

        let err = result.unwrap_err();
        assert!(matches!(err, HostError::ClientConstruction(_)));
        assert_eq!(err.to_string(), "failed to construct render client: pipeline creation failed");
        assert_eq!(context_calls.get(), 1);
        assert_eq!(client_calls.get(), 1);
    }

    #[test]
    fn first_failure_is_the_one_returned() {
        let mut slot = None;
        record_failure(&mut slot, HostError::ContextUnavailable(anyhow::anyhow!("no adapter")));
        record_failure(&mut slot, HostError::InvalidFrameRate(0.0));

        assert!(matches!(slot, Some(HostError::ContextUnavailable(_))));
    }

    #[test]
    fn successful_start_hands_back_both() {
        let (ctx, client) = open_session(|| Ok("gpu"), |ctx: &&str| Ok(ctx.len())).unwrap();
        assert_eq!(ctx, "gpu");
        assert_eq!(client, 3);
    }
}
