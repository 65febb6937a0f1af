//! Frame pacing.
//!
//! The pacer throttles a [`RenderClient`](crate::core::RenderClient) to a target
//! cadence, reconciles the surface size before each executed frame, and hands
//! the client the elapsed time since start.
//!
//! Intended usage:
//! - the host delivers ticks at least as often as the target cadence
//! - every tick first asks the [`FrameScheduler`] for the next one
//! - ticks that arrive early are no-ops

mod config;
mod frame_loop;
mod frame_pacer;
mod scheduler;

#[cfg(test)]
mod testing;

pub use config::PacerConfig;
pub use frame_loop::FrameLoop;
pub use frame_pacer::{FramePacer, PacerState, TickOutcome};
pub use scheduler::{FrameScheduler, QueueScheduler};
