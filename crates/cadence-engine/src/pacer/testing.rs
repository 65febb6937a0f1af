//! Recording doubles for pacer tests.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Result};

use crate::coords::{SurfaceSize, ViewportRect};
use crate::core::{RenderClient, Surface};

/// One observable side effect of a tick, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ApplySize(SurfaceSize),
    Viewport(ViewportRect),
    Update { elapsed_ms: f64, height: u32, width: u32 },
    Render,
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

pub(crate) struct RecordingSurface {
    drawable: SurfaceSize,
    log: CallLog,
    resizes: usize,
    viewport_calls: usize,
}

impl RecordingSurface {
    pub(crate) fn new(drawable: SurfaceSize) -> Self {
        Self {
            drawable,
            log: CallLog::default(),
            resizes: 0,
            viewport_calls: 0,
        }
    }

    pub(crate) fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    /// Simulates the platform resizing the window.
    pub(crate) fn set_drawable(&mut self, size: SurfaceSize) {
        self.drawable = size;
    }

    pub(crate) fn resizes(&self) -> usize {
        self.resizes
    }

    pub(crate) fn viewport_calls(&self) -> usize {
        self.viewport_calls
    }
}

impl Surface for RecordingSurface {
    fn drawable_size(&self) -> SurfaceSize {
        self.drawable
    }

    fn apply_size(&mut self, size: SurfaceSize) {
        self.resizes += 1;
        self.log.borrow_mut().push(Call::ApplySize(size));
    }

    fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport_calls += 1;
        self.log.borrow_mut().push(Call::Viewport(viewport));
    }
}

pub(crate) struct RecordingClient {
    log: CallLog,
    updates: usize,
    fail_update_at: Option<usize>,
}

impl RecordingClient {
    pub(crate) fn new(log: CallLog) -> Self {
        Self {
            log,
            updates: 0,
            fail_update_at: None,
        }
    }

    /// Makes the `n`th `update` call (0-based) fail.
    pub(crate) fn fail_update_at(&mut self, n: usize) {
        self.fail_update_at = Some(n);
    }

    /// Elapsed values passed to `update`, in call order.
    pub(crate) fn elapsed(&self) -> Vec<f64> {
        self.log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Update { elapsed_ms, .. } => Some(*elapsed_ms),
                _ => None,
            })
            .collect()
    }
}

impl<S: Surface + ?Sized> RenderClient<S> for RecordingClient {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) -> Result<()> {
        self.log
            .borrow_mut()
            .push(Call::Update { elapsed_ms, height, width });

        let n = self.updates;
        self.updates += 1;
        if self.fail_update_at == Some(n) {
            bail!("update failed");
        }
        Ok(())
    }

    fn render(&mut self, _surface: &mut S) -> Result<()> {
        self.log.borrow_mut().push(Call::Render);
        Ok(())
    }
}
