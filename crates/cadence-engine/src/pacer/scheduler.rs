use std::collections::VecDeque;

/// Continuation scheduler consumed by the pacer.
///
/// `request_next_frame` is fire-and-forget: it asks the host to deliver one
/// more tick at a host-determined time. Repeated requests before that tick
/// coalesce, the way `Window::request_redraw` does.
pub trait FrameScheduler {
    fn request_next_frame(&mut self);
}

impl<Q: FrameScheduler + ?Sized> FrameScheduler for &mut Q {
    fn request_next_frame(&mut self) {
        (**self).request_next_frame();
    }
}

/// Deterministic scheduler that delivers ticks from a scripted list of
/// timestamps.
///
/// A timestamp is released only while a continuation request is pending, so a
/// loop that stops requesting frames stops receiving ticks. The first
/// timestamp is released without a request: it plays the role of the host's
/// initial direct call.
#[derive(Debug, Clone)]
pub struct QueueScheduler {
    timestamps: VecDeque<f64>,
    pending: bool,
    requests: u64,
}

impl QueueScheduler {
    pub fn new(timestamps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            timestamps: timestamps.into_iter().collect(),
            pending: true,
            requests: 0,
        }
    }

    /// Releases the next timestamp if a tick has been requested.
    pub fn next_tick(&mut self) -> Option<f64> {
        if !self.pending {
            return None;
        }
        let ts = self.timestamps.pop_front()?;
        self.pending = false;
        Some(ts)
    }

    /// Number of continuation requests received so far.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Timestamps not yet delivered.
    pub fn remaining(&self) -> usize {
        self.timestamps.len()
    }
}

impl FrameScheduler for QueueScheduler {
    fn request_next_frame(&mut self) {
        self.requests += 1;
        self.pending = true;
    }
}
