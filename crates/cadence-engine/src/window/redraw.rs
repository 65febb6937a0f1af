use crate::pacer::FrameScheduler;

/// Continuation requests for a winit window.
///
/// The pacer's request is only recorded here; the runtime turns it into
/// `Window::request_redraw` once the pacer is due, and sleeps until then.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    requested: bool,
}

impl RedrawScheduler {
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consumes the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_next_frame(&mut self) {
        self.requested = true;
    }
}

/// What the event loop should do before the next tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Wake {
    /// No tick requested; wait for window events.
    Sleep,
    /// A tick is requested but the pacer is not due until this timestamp.
    SleepUntil(f64),
    /// Deliver the requested tick now.
    RedrawNow,
}

/// Turns a pending continuation request into a wake-up decision.
///
/// `next_due` is `None` before the first frame, which is always due.
pub(crate) fn wake_plan(requested: bool, next_due: Option<f64>, now: f64) -> Wake {
    if !requested {
        return Wake::Sleep;
    }
    match next_due {
        Some(due) if now < due => Wake::SleepUntil(due),
        _ => Wake::RedrawNow,
    }
}
